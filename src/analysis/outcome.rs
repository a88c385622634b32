//! Result types shared by the Euler and Hamilton searches.

use crate::store::{Registry, VertexId};

/// A closed walk, stored with its start vertex repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    vertices: Vec<VertexId>,
}

impl Cycle {
    pub fn new(vertices: Vec<VertexId>) -> Self { Self { vertices } }

    /// The zero-length walk that stays on `start`.
    pub fn trivial(start: VertexId) -> Self { Self { vertices: vec![start] } }

    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    pub fn len_edges(&self) -> usize { self.vertices.len().saturating_sub(1) }

    pub fn keys<'a>(&self, registry: &'a Registry) -> Vec<&'a str> {
        self.vertices.iter().map(|&v| registry.key(v)).collect()
    }
}

/// Why a search produced no cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// A vertex whose out-degree differs from its in-degree.
    DegreeImbalance { vertex: VertexId },
    /// The graph, ignoring edge direction, has more than one component.
    Disconnected,
    /// A vertex that cannot be both entered and left.
    DeadEnd { vertex: VertexId },
    /// Every candidate path was tried.
    Exhausted,
    /// The configured step budget ran out first.
    BudgetExhausted { steps: u64 },
    /// The walk closed before every edge was used.
    Incomplete,
}

impl NotFoundReason {
    pub fn describe(&self, registry: &Registry) -> String {
        match self {
            Self::DegreeImbalance { vertex } => format!(
                "vertex '{}' has out-degree {} but in-degree {}",
                registry.key(*vertex),
                registry.out_degree(*vertex),
                registry.in_degree[vertex.index()]
            ),
            Self::Disconnected => "graph is not connected".to_string(),
            Self::DeadEnd { vertex } => {
                format!("vertex '{}' cannot be both entered and left", registry.key(*vertex))
            }
            Self::Exhausted => "search space exhausted".to_string(),
            Self::BudgetExhausted { steps } => {
                format!("step budget exhausted after {} steps", steps)
            }
            Self::Incomplete => "closed walk does not cover every edge".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Cycle),
    NotFound(NotFoundReason),
}

impl SearchOutcome {
    pub fn cycle(&self) -> Option<&Cycle> {
        match self {
            Self::Found(c) => Some(c),
            Self::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&NotFoundReason> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(r) => Some(r),
        }
    }

    pub fn is_found(&self) -> bool { matches!(self, Self::Found(_)) }
}
