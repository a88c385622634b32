//! Cycle searches over a `Registry`.
//!
//! Both searches are pure functions of the graph: all scratch state (cursors,
//! visited sets, stacks) lives inside a single call.
pub mod connectivity;
pub mod degree;
pub mod euler;
pub mod hamilton;
pub mod outcome;

pub use euler::find_euler_cycle;
pub use hamilton::find_hamilton_cycle;
pub use outcome::{Cycle, NotFoundReason, SearchOutcome};

use crate::config::SearchConfig;
use crate::error::GraphError;
use crate::store::Registry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleKind {
    Euler,
    Hamilton,
}

impl CycleKind {
    pub const ALL: [CycleKind; 2] = [CycleKind::Euler, CycleKind::Hamilton];

    pub fn label(&self) -> &'static str {
        match self {
            CycleKind::Euler => "Euler",
            CycleKind::Hamilton => "Hamilton",
        }
    }

    pub fn find(
        &self,
        registry: &Registry,
        start: &str,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, GraphError> {
        match self {
            CycleKind::Euler => find_euler_cycle(registry, start),
            CycleKind::Hamilton => find_hamilton_cycle(registry, start, config),
        }
    }
}
