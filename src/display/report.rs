use crate::analysis::{CycleKind, SearchOutcome};
use crate::error::GraphError;
use crate::store::Registry;
use serde::Serialize;
use std::fmt::Write;

/// One search result, detached from the registry so it can be printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub algorithm: CycleKind,
    pub start: String,
    pub cycle: Option<Vec<String>>,
    pub reason: Option<String>,
}

impl CycleReport {
    pub fn new(
        algorithm: CycleKind,
        registry: &Registry,
        start: &str,
        outcome: &SearchOutcome,
    ) -> Self {
        Self {
            algorithm,
            start: start.to_string(),
            cycle: outcome
                .cycle()
                .map(|c| c.keys(registry).into_iter().map(String::from).collect()),
            reason: outcome.reason().map(|r| r.describe(registry)),
        }
    }
}

/// Renders one line per report:
///
/// ```text
/// Euler Cycle: [1, 2, 3, 1]
/// Hamilton Cycle: No Hamilton cycle found
/// ```
///
/// With `with_reasons`, a not-found line is followed by ` (<reason>)`.
pub fn format_text(reports: &[CycleReport], with_reasons: bool) -> String {
    let mut output = String::new();
    for report in reports {
        let label = report.algorithm.label();
        match &report.cycle {
            Some(keys) => {
                let _ = writeln!(output, "{} Cycle: [{}]", label, keys.join(", "));
            }
            None => {
                let _ = write!(output, "{} Cycle: No {} cycle found", label, label);
                let _ = match (&report.reason, with_reasons) {
                    (Some(reason), true) => writeln!(output, " ({})", reason),
                    _ => writeln!(output),
                };
            }
        }
    }
    output
}

pub fn format_json(reports: &[CycleReport]) -> Result<String, GraphError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
