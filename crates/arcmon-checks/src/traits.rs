use arcmon_types::ServiceReport;

use crate::Result;
use crate::params::CheckParams;

/// Check plugin evaluation contract
///
/// Responsibilities:
/// - Declare which agent section the plugin consumes
/// - Run the parse → discover → check pipeline over that section's payload
/// - Emit one report per discovered service
///
/// The typed stage functions stay public in each plugin module; this trait is
/// the type-erased seam the evaluation driver works against.
pub trait CheckPlugin: Send + Sync + std::fmt::Debug {
    /// Unique plugin ID (e.g. "arc_state")
    fn name(&self) -> &'static str;

    /// Agent section this plugin consumes
    fn section_name(&self) -> &'static str;

    /// Display name of the monitored service
    fn service_name(&self) -> &'static str;

    /// Evaluate one section payload into service reports
    fn evaluate(&self, lines: &[String], params: &CheckParams) -> Result<Vec<ServiceReport>>;
}
