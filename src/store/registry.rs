use super::types::*;
use crate::error::GraphError;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Outgoing edges of a single vertex, in insertion order.
pub type OutEdges = SmallVec<[EdgeId; 4]>;

/// Append-only arena holding the vertices and directed edges of one graph.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Columnar Arrays (per vertex)
    pub meta: Vec<VertexMetadata>,
    pub out_edges: Vec<OutEdges>,
    pub in_degree: Vec<u32>,

    // Columnar Arrays (per edge)
    pub edge_sources: Vec<VertexId>,
    pub edge_targets: Vec<VertexId>,

    key_index: HashMap<String, VertexId>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.meta.len() }
    pub fn edge_count(&self) -> usize { self.edge_targets.len() }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.count()).map(VertexId::new)
    }

    pub fn add_vertex(&mut self, meta: VertexMetadata) -> Result<VertexId, GraphError> {
        if self.key_index.contains_key(&meta.key) {
            return Err(GraphError::DuplicateVertex(meta.key));
        }
        let id = VertexId(self.meta.len() as u32);

        self.key_index.insert(meta.key.clone(), id);
        self.meta.push(meta);
        self.out_edges.push(OutEdges::new());
        self.in_degree.push(0);

        Ok(id)
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId, GraphError> {
        for v in [from, to] {
            if v.index() >= self.count() {
                return Err(GraphError::InvalidVertexId(v.0));
            }
        }
        let id = EdgeId(self.edge_targets.len() as u32);

        self.edge_sources.push(from);
        self.edge_targets.push(to);
        self.out_edges[from.index()].push(id);
        self.in_degree[to.index()] += 1;

        Ok(id)
    }

    pub fn lookup(&self, key: &str) -> Option<VertexId> {
        self.key_index.get(key).copied()
    }

    /// Resolves the starting vertex of a search.
    pub fn resolve_start(&self, key: &str) -> Result<VertexId, GraphError> {
        self.lookup(key).ok_or_else(|| GraphError::UnknownStartVertex(key.to_string()))
    }

    #[inline(always)]
    pub fn key(&self, id: VertexId) -> &str { &self.meta[id.index()].key }

    #[inline(always)]
    pub fn get_out_edges(&self, id: VertexId) -> &[EdgeId] { &self.out_edges[id.index()] }

    #[inline(always)]
    pub fn target(&self, edge: EdgeId) -> VertexId { self.edge_targets[edge.index()] }

    pub fn out_degree(&self, id: VertexId) -> usize { self.out_edges[id.index()].len() }

    /// Successor vertices of `id`, one entry per outgoing edge.
    pub fn successors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.get_out_edges(id).iter().map(move |&e| self.target(e))
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.successors(from).any(|v| v == to)
    }
}
