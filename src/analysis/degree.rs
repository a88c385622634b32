use crate::store::{Registry, VertexId};

/// Returns the first vertex (in id order) whose out-degree differs from its in-degree.
pub fn first_imbalance(registry: &Registry) -> Option<VertexId> {
    registry
        .vertex_ids()
        .find(|&v| registry.out_degree(v) != registry.in_degree[v.index()] as usize)
}

/// Returns the first vertex that has no incoming or no outgoing edge to or
/// from another vertex. Self-loops do not count.
pub fn first_dead_end(registry: &Registry) -> Option<VertexId> {
    let count = registry.count();
    let mut has_in = vec![false; count];
    let mut has_out = vec![false; count];

    for (&from, &to) in registry.edge_sources.iter().zip(&registry.edge_targets) {
        if from != to {
            has_out[from.index()] = true;
            has_in[to.index()] = true;
        }
    }

    registry.vertex_ids().find(|v| !(has_in[v.index()] && has_out[v.index()]))
}
