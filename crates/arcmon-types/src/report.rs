use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One monitored service instance emitted by a plugin's discovery stage.
///
/// `item` distinguishes multiple services of the same plugin on one host;
/// single-service plugins leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl Service {
    pub fn with_item(item: impl Into<String>) -> Self {
        Self {
            item: Some(item.into()),
        }
    }
}

/// Severity plus rendered text produced by a check stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub severity: Severity,
    pub summary: String,
    /// Multi-line elaboration of the summary; empty when the summary says it all.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,
}

impl CheckOutcome {
    pub fn new(severity: Severity, summary: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            details: String::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

/// One evaluated service of one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub plugin: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    pub outcome: CheckOutcome,
}

/// All service reports produced for one host's collected output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReport {
    pub services: Vec<ServiceReport>,
}

impl HostReport {
    pub fn push(&mut self, report: ServiceReport) {
        self.services.push(report);
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Worst severity across every evaluated service.
    pub fn worst(&self) -> Severity {
        Severity::worst(self.services.iter().map(|s| s.outcome.severity))
    }

    /// Exit code the evaluating process should report.
    pub fn exit_code(&self) -> i32 {
        self.worst().exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(severity: Severity) -> ServiceReport {
        ServiceReport {
            plugin: "arc_state".to_string(),
            service: "Azure Arc state".to_string(),
            item: None,
            outcome: CheckOutcome::new(severity, "State: Connected"),
        }
    }

    #[test]
    fn empty_host_report_is_ok() {
        let host = HostReport::default();
        assert_eq!(host.worst(), Severity::Ok);
        assert_eq!(host.exit_code(), 0);
        assert!(host.is_empty());
    }

    #[test]
    fn host_report_worst_spans_services() {
        let mut host = HostReport::default();
        host.push(report(Severity::Ok));
        host.push(report(Severity::Crit));
        host.push(report(Severity::Warn));

        assert_eq!(host.worst(), Severity::Crit);
        assert_eq!(host.exit_code(), 2);
        assert_eq!(host.len(), 3);
    }

    #[test]
    fn outcome_serializes_severity_as_integer() {
        let outcome = CheckOutcome::new(Severity::Warn, "State: Disconnected");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["severity"], 1);
        assert_eq!(json["summary"], "State: Disconnected");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn outcome_details_survive_round_trip() {
        let outcome = CheckOutcome::new(Severity::Crit, "Extensions: a (failed)")
            .with_details("a (failed)\nb (succeeded)");
        let json = serde_json::to_string(&outcome).unwrap();
        let back: CheckOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
