use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
}

/// Identity and display data for one vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexMetadata {
    /// The caller-supplied identifier, unique within a graph (e.g. `"1"`).
    pub key: String,
    pub name: Option<String>,
}

impl VertexMetadata {
    pub fn new(key: impl Into<String>, name: Option<String>) -> Self {
        Self { key: key.into(), name }
    }
}
