use super::outcome::{Cycle, NotFoundReason, SearchOutcome};
use super::{connectivity, degree};
use crate::error::GraphError;
use crate::store::{Registry, VertexId};
use tracing::{debug, trace};

/// Finds a closed walk from `start` that uses every edge exactly once.
///
/// Existence is checked up front (balanced degrees, one weak component); the
/// walk itself is built with Hierholzer's algorithm. A graph without edges
/// yields the trivial cycle `[start]`.
pub fn find_euler_cycle(registry: &Registry, start: &str) -> Result<SearchOutcome, GraphError> {
    let start = registry.resolve_start(start)?;
    Ok(euler_from(registry, start))
}

pub fn euler_from(registry: &Registry, start: VertexId) -> SearchOutcome {
    if registry.edge_count() == 0 {
        return SearchOutcome::Found(Cycle::trivial(start));
    }

    if let Some(vertex) = degree::first_imbalance(registry) {
        debug!(vertex = registry.key(vertex), "euler: degree imbalance, skipping traversal");
        return SearchOutcome::NotFound(NotFoundReason::DegreeImbalance { vertex });
    }

    if !connectivity::is_weakly_connected(registry) {
        debug!("euler: graph is disconnected");
        return SearchOutcome::NotFound(NotFoundReason::Disconnected);
    }

    let circuit = splice_circuit(registry, start);
    if circuit.len() != registry.edge_count() + 1 {
        debug!(
            used = circuit.len().saturating_sub(1),
            total = registry.edge_count(),
            "euler: circuit incomplete"
        );
        return SearchOutcome::NotFound(NotFoundReason::Incomplete);
    }

    debug!(len = circuit.len(), "euler: cycle found");
    SearchOutcome::Found(Cycle::new(circuit))
}

/// Stack-based circuit splicing.
///
/// `cursor[v]` is the next unused slot in `v`'s outgoing list, so every edge
/// is consumed exactly once and in adjacency order. A vertex moves from the
/// stack to the circuit once it has no unused edge left; the circuit is
/// therefore produced back to front.
fn splice_circuit(registry: &Registry, start: VertexId) -> Vec<VertexId> {
    let mut cursor = vec![0usize; registry.count()];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(registry.edge_count() + 1);

    while let Some(&current) = stack.last() {
        let slot = cursor[current.index()];
        match registry.get_out_edges(current).get(slot) {
            Some(&edge) => {
                cursor[current.index()] += 1;
                let next = registry.target(edge);
                trace!(from = registry.key(current), to = registry.key(next), "euler: follow edge");
                stack.push(next);
            }
            None => {
                stack.pop();
                circuit.push(current);
            }
        }
    }

    circuit.reverse();
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GraphSeed;

    fn graph(json: &str) -> Registry {
        GraphSeed::from_json_str(json).unwrap().build().unwrap()
    }

    fn keys(reg: &Registry, outcome: &SearchOutcome) -> Vec<String> {
        let cycle = outcome.cycle().expect("expected a cycle");
        cycle.keys(reg).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_sample_cycle() {
        let reg = GraphSeed::sample().build().unwrap();
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(keys(&reg, &outcome), ["1", "2", "3", "1"]);
    }

    #[test]
    fn test_start_elsewhere_rotates_cycle() {
        let reg = GraphSeed::sample().build().unwrap();
        let outcome = find_euler_cycle(&reg, "2").unwrap();
        assert_eq!(keys(&reg, &outcome), ["2", "3", "1", "2"]);
    }

    #[test]
    fn test_dead_end_is_spliced_in() {
        // From 2 the walk first returns to 1 and gets stuck; the 2 -> 3 -> 2
        // detour must be spliced into the circuit.
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"}],
                "edges":[["1","2"],["2","1"],["2","3"],["3","2"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(keys(&reg, &outcome), ["1", "2", "3", "2", "1"]);
        assert_eq!(outcome.cycle().unwrap().len_edges(), reg.edge_count());
    }

    #[test]
    fn test_two_loops_through_shared_vertex() {
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"}],
                "edges":[["1","2"],["2","1"],["1","3"],["3","1"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(keys(&reg, &outcome), ["1", "2", "1", "3", "1"]);
    }

    #[test]
    fn test_parallel_edges_each_used_once() {
        let reg = graph(
            r#"{"vertices":[{"id":"a"},{"id":"b"}],
                "edges":[["a","b"],["b","a"],["a","b"],["b","a"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "a").unwrap();
        assert_eq!(keys(&reg, &outcome), ["a", "b", "a", "b", "a"]);
    }

    #[test]
    fn test_imbalance_short_circuits() {
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"}],
                "edges":[["1","2"],["2","3"],["3","1"],["1","3"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        let one = reg.lookup("1").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::NotFound(NotFoundReason::DegreeImbalance { vertex: one })
        );
    }

    #[test]
    fn test_isolated_vertex_means_disconnected() {
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"},{"id":"4"}],
                "edges":[["1","2"],["2","3"],["3","1"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound(NotFoundReason::Disconnected));
    }

    #[test]
    fn test_two_separate_cycles_are_disconnected() {
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"},{"id":"4"}],
                "edges":[["1","2"],["2","1"],["3","4"],["4","3"]]}"#,
        );
        let outcome = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(outcome.reason(), Some(&NotFoundReason::Disconnected));
    }

    #[test]
    fn test_no_edges_gives_trivial_cycle() {
        let reg = graph(r#"{"vertices":[{"id":"solo"}]}"#);
        let outcome = find_euler_cycle(&reg, "solo").unwrap();
        assert_eq!(keys(&reg, &outcome), ["solo"]);
        assert_eq!(outcome.cycle().unwrap().len_edges(), 0);
    }

    #[test]
    fn test_edgeless_graph_is_trivial_even_with_other_vertices() {
        // No edge to cover, so the empty walk counts; connectivity is not consulted.
        let reg = graph(r#"{"vertices":[{"id":"a"},{"id":"b"}]}"#);
        let outcome = find_euler_cycle(&reg, "a").unwrap();
        assert_eq!(keys(&reg, &outcome), ["a"]);
        assert!(!connectivity::is_weakly_connected(&reg));
    }

    #[test]
    fn test_self_loop() {
        let reg = graph(r#"{"vertices":[{"id":"x"}],"edges":[["x","x"]]}"#);
        let outcome = find_euler_cycle(&reg, "x").unwrap();
        assert_eq!(keys(&reg, &outcome), ["x", "x"]);
    }

    #[test]
    fn test_unknown_start() {
        let reg = GraphSeed::sample().build().unwrap();
        let err = find_euler_cycle(&reg, "42").unwrap_err();
        assert!(matches!(err, GraphError::UnknownStartVertex(k) if k == "42"));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let reg = graph(
            r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"}],
                "edges":[["1","2"],["2","1"],["2","3"],["3","2"]]}"#,
        );
        let first = find_euler_cycle(&reg, "1").unwrap();
        let second = find_euler_cycle(&reg, "1").unwrap();
        assert_eq!(first, second);
    }
}
