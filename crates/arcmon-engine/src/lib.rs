// Engine module - evaluation driver between collected agent output and reports
// This layer sits between raw agent text (sections) and CLI presentation

pub mod evaluate;
pub mod sections;

pub use evaluate::evaluate_host;
pub use sections::split_sections;

use arcmon_checks::CheckParams;
use arcmon_types::HostReport;

// Façade API - Stable public interface for CLI layer

/// Evaluate one host's collected agent output with the given parameters
pub fn evaluate(input: &str, params: &CheckParams) -> HostReport {
    evaluate_host(input, params)
}
