use crate::store::Registry;
use petgraph::unionfind::UnionFind;
use std::collections::HashSet;

/// Number of components of the graph with edge direction ignored.
/// Isolated vertices count as their own component.
pub fn weak_components(registry: &Registry) -> usize {
    let mut sets = UnionFind::<usize>::new(registry.count());
    for (&from, &to) in registry.edge_sources.iter().zip(&registry.edge_targets) {
        sets.union(from.index(), to.index());
    }
    sets.into_labeling().into_iter().collect::<HashSet<_>>().len()
}

/// An empty graph counts as connected.
pub fn is_weakly_connected(registry: &Registry) -> bool {
    weak_components(registry) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GraphSeed;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"vertices":[],"edges":[]}"#, 0)]
    #[case(r#"{"vertices":[{"id":"1"}]}"#, 1)]
    #[case(r#"{"vertices":[{"id":"1"},{"id":"2"}]}"#, 2)]
    // Direction is ignored: 1 -> 2 <- 3 is one component.
    #[case(r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"}],"edges":[["1","2"],["3","2"]]}"#, 1)]
    #[case(r#"{"vertices":[{"id":"1"},{"id":"2"},{"id":"3"},{"id":"4"}],"edges":[["1","2"],["3","4"]]}"#, 2)]
    fn test_weak_components(#[case] json: &str, #[case] expected: usize) {
        let reg = GraphSeed::from_json_str(json).unwrap().build().unwrap();
        assert_eq!(weak_components(&reg), expected);
        assert_eq!(is_weakly_connected(&reg), expected <= 1);
    }
}
