//! seed.rs
//! Literal vertex/edge lists used to populate a fresh `Registry`.

use super::registry::Registry;
use super::types::VertexMetadata;
use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSeed {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A directed edge `(from, to)`, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSeed(pub String, pub String);

/// The contents of a graph, as handed in by the caller.
///
/// JSON form: `{"vertices":[{"id":"1","name":"v1"}],"edges":[["1","2"]]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSeed {
    #[serde(default)]
    pub vertices: Vec<VertexSeed>,
    #[serde(default)]
    pub edges: Vec<EdgeSeed>,
}

impl GraphSeed {
    /// The demo graph: `v1 -> v2 -> v3 -> v1`.
    pub fn sample() -> Self {
        let vertices = (1..=3)
            .map(|i| VertexSeed { id: i.to_string(), name: Some(format!("v{}", i)) })
            .collect();
        let edges = [("1", "2"), ("2", "3"), ("3", "1")]
            .into_iter()
            .map(|(a, b)| EdgeSeed(a.into(), b.into()))
            .collect();
        Self { vertices, edges }
    }

    pub fn from_json_str(s: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, GraphError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a new registry from scratch. Vertices are inserted first so that
    /// edges may reference any of them regardless of listing order.
    pub fn build(&self) -> Result<Registry, GraphError> {
        let mut registry = Registry::new();

        for v in &self.vertices {
            registry.add_vertex(VertexMetadata::new(v.id.clone(), v.name.clone()))?;
        }

        for EdgeSeed(from, to) in &self.edges {
            let a = registry.lookup(from).ok_or_else(|| GraphError::UnknownVertex(from.clone()))?;
            let b = registry.lookup(to).ok_or_else(|| GraphError::UnknownVertex(to.clone()))?;
            registry.add_edge(a, b)?;
        }

        tracing::debug!(
            vertices = registry.count(),
            edges = registry.edge_count(),
            "graph built"
        );
        Ok(registry)
    }
}
