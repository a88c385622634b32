//! Tuning knobs for the cycle searches.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on path extensions made by the Hamiltonian backtracking.
    /// `None` searches until the space is exhausted.
    pub hamilton_step_limit: Option<u64>,
}

impl SearchConfig {
    /// Reads a JSON config file, or falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, GraphError> {
        match path {
            Some(p) => {
                let raw = fs::read_to_string(p)?;
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn with_step_limit(mut self, limit: Option<u64>) -> Self {
        if limit.is_some() {
            self.hamilton_step_limit = limit;
        }
        self
    }
}
