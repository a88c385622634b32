//! Euler and Hamiltonian cycle search over small in-memory directed graphs.
//!
//! A graph is described by a [`GraphSeed`] (literal or JSON vertex/edge lists),
//! built into a [`Registry`], and searched with [`find_euler_cycle`] or
//! [`find_hamilton_cycle`]. Not finding a cycle is a normal outcome
//! ([`SearchOutcome::NotFound`]), not an error.

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod store;

pub use analysis::{
    find_euler_cycle, find_hamilton_cycle, Cycle, CycleKind, NotFoundReason, SearchOutcome,
};
pub use config::SearchConfig;
pub use error::GraphError;
pub use store::{GraphSeed, Registry, VertexId};
