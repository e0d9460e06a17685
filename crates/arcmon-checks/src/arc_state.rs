//! Azure Arc connectivity-state check.
//!
//! Consumes the `azure_arc_state` agent section: a single line carrying the
//! machine's Arc connectivity state as reported by the resource provider
//! (e.g. `Connected`).

use arcmon_types::{CheckOutcome, Service, ServiceReport, Severity};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::CheckParams;
use crate::traits::CheckPlugin;

pub const PLUGIN_NAME: &str = "arc_state";
pub const SECTION_NAME: &str = "azure_arc_state";
pub const SERVICE_NAME: &str = "Azure Arc state";

/// Arc connectivity state parsed from the agent section.
///
/// The state is kept verbatim; severity lookup lowercases it, output keeps
/// the original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcStateSection {
    pub state: String,
}

/// Severity mapping for the known Arc connectivity states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcStateParams {
    pub connected: Severity,
    pub disconnected: Severity,
    pub error: Severity,
    pub expired: Severity,
}

impl Default for ArcStateParams {
    fn default() -> Self {
        Self {
            connected: Severity::Ok,
            disconnected: Severity::Warn,
            error: Severity::Crit,
            expired: Severity::Unknown,
        }
    }
}

impl ArcStateParams {
    /// Configured severity for a recognized state name (already lowercased).
    /// `None` for states outside the known vocabulary.
    pub fn severity_for(&self, state: &str) -> Option<Severity> {
        match state {
            "connected" => Some(self.connected),
            "disconnected" => Some(self.disconnected),
            "error" => Some(self.error),
            "expired" => Some(self.expired),
            _ => None,
        }
    }
}

/// Take the reported state from the first payload line.
pub fn parse(lines: &[String]) -> Result<ArcStateSection> {
    let state = lines
        .first()
        .ok_or_else(|| Error::Parse(format!("section {} carried no state line", SECTION_NAME)))?;
    Ok(ArcStateSection {
        state: state.clone(),
    })
}

/// One service per parsed section, no item.
pub fn discover(_section: &ArcStateSection) -> Vec<Service> {
    vec![Service::default()]
}

/// Map the reported state to its configured severity.
///
/// States outside the known vocabulary degrade to `Unknown` with an
/// `(undefined)` marker instead of failing the evaluation.
pub fn check(params: &ArcStateParams, section: &ArcStateSection) -> CheckOutcome {
    let state = section.state.to_lowercase();
    match params.severity_for(&state) {
        Some(severity) => CheckOutcome::new(severity, format!("State: {}", section.state)),
        None => CheckOutcome::new(
            Severity::Unknown,
            format!("State: {} (undefined)", section.state),
        ),
    }
}

/// Adapter wiring the stages into the driver contract.
#[derive(Debug)]
pub struct ArcStatePlugin;

impl CheckPlugin for ArcStatePlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn section_name(&self) -> &'static str {
        SECTION_NAME
    }

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    fn evaluate(&self, lines: &[String], params: &CheckParams) -> Result<Vec<ServiceReport>> {
        let section = parse(lines)?;
        let reports = discover(&section)
            .into_iter()
            .map(|service| ServiceReport {
                plugin: PLUGIN_NAME.to_string(),
                service: SERVICE_NAME.to_string(),
                item: service.item,
                outcome: check(&params.arc_state, &section),
            })
            .collect();
        Ok(reports)
    }
}
