use super::outcome::{Cycle, NotFoundReason, SearchOutcome};
use super::{connectivity, degree};
use crate::config::SearchConfig;
use crate::error::GraphError;
use crate::store::{Registry, VertexId};
use tracing::{debug, trace};

/// Finds a closed walk from `start` visiting every vertex exactly once.
///
/// Backtracking search over successors in ascending key order; the first
/// complete cycle wins. Worst case is exponential in the vertex count, which
/// `SearchConfig::hamilton_step_limit` can cap.
pub fn find_hamilton_cycle(
    registry: &Registry,
    start: &str,
    config: &SearchConfig,
) -> Result<SearchOutcome, GraphError> {
    let start = registry.resolve_start(start)?;
    Ok(hamilton_from(registry, start, config))
}

pub fn hamilton_from(registry: &Registry, start: VertexId, config: &SearchConfig) -> SearchOutcome {
    let count = registry.count();
    if count == 1 {
        return SearchOutcome::Found(Cycle::trivial(start));
    }

    if !connectivity::is_weakly_connected(registry) {
        debug!("hamilton: graph is disconnected");
        return SearchOutcome::NotFound(NotFoundReason::Disconnected);
    }
    if let Some(vertex) = degree::first_dead_end(registry) {
        debug!(vertex = registry.key(vertex), "hamilton: dead-end vertex");
        return SearchOutcome::NotFound(NotFoundReason::DeadEnd { vertex });
    }

    let candidates = sorted_successors(registry);
    let mut search = Backtracker {
        registry,
        start,
        candidates: &candidates,
        visited: vec![false; count],
        path: Vec::with_capacity(count + 1),
        steps: 0,
        step_limit: config.hamilton_step_limit,
    };
    search.visited[start.index()] = true;
    search.path.push(start);

    match search.search() {
        Step::Found => {
            debug!(steps = search.steps, "hamilton: cycle found");
            let mut path = search.path;
            path.push(start);
            SearchOutcome::Found(Cycle::new(path))
        }
        Step::Exhausted => {
            debug!(steps = search.steps, "hamilton: no cycle");
            SearchOutcome::NotFound(NotFoundReason::Exhausted)
        }
        Step::OutOfBudget => {
            debug!(steps = search.steps, "hamilton: step budget exhausted");
            SearchOutcome::NotFound(NotFoundReason::BudgetExhausted { steps: search.steps })
        }
    }
}

/// Distinct successors of every vertex, sorted by key.
fn sorted_successors(registry: &Registry) -> Vec<Vec<VertexId>> {
    registry
        .vertex_ids()
        .map(|v| {
            let mut next: Vec<VertexId> = registry.successors(v).filter(|&n| n != v).collect();
            next.sort_by(|a, b| registry.key(*a).cmp(registry.key(*b)));
            next.dedup();
            next
        })
        .collect()
}

enum Step {
    Found,
    Exhausted,
    OutOfBudget,
}

struct Backtracker<'a> {
    registry: &'a Registry,
    start: VertexId,
    candidates: &'a [Vec<VertexId>],
    visited: Vec<bool>,
    path: Vec<VertexId>,
    steps: u64,
    step_limit: Option<u64>,
}

impl Backtracker<'_> {
    /// Depth-first backtracking driven by an explicit frame stack, so path
    /// length is bounded by heap, not by the call stack.
    ///
    /// Each frame is `(tail, cursor)`: the path vertex it extends from and the
    /// next slot of its candidate list to try. Popping any frame other than
    /// the root undoes that frame's vertex.
    fn search(&mut self) -> Step {
        let count = self.registry.count();
        let candidates = self.candidates;
        let mut frames: Vec<(VertexId, usize)> = vec![(self.start, 0)];

        while let Some(&(tail, cursor)) = frames.last() {
            let slot = if self.path.len() == count {
                if self.registry.has_edge(tail, self.start) {
                    return Step::Found;
                }
                None
            } else {
                candidates[tail.index()][cursor..]
                    .iter()
                    .position(|v| !self.visited[v.index()])
                    .map(|offset| cursor + offset)
            };

            match slot {
                Some(slot) => {
                    if self.step_limit.is_some_and(|limit| self.steps >= limit) {
                        return Step::OutOfBudget;
                    }
                    self.steps += 1;

                    let next = candidates[tail.index()][slot];
                    if let Some(top) = frames.last_mut() {
                        top.1 = slot + 1;
                    }
                    self.visited[next.index()] = true;
                    self.path.push(next);
                    trace!(
                        depth = self.path.len(),
                        vertex = self.registry.key(next),
                        "hamilton: extend"
                    );
                    frames.push((next, 0));
                }
                None => {
                    frames.pop();
                    if !frames.is_empty() {
                        self.path.pop();
                        self.visited[tail.index()] = false;
                    }
                }
            }
        }
        Step::Exhausted
    }
}
