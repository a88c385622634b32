//! Vertex/edge storage for the graphs searched by `analysis`.
pub mod registry;
pub mod seed;
pub mod types;

pub use registry::{OutEdges, Registry};
pub use seed::{EdgeSeed, GraphSeed, VertexSeed};
pub use types::{EdgeId, VertexId, VertexMetadata};
