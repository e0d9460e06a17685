//! Azure machine-extension provisioning check.
//!
//! Consumes the `azure_machine_extension` agent section: one JSON document
//! describing a machine's Arc status and its installed extensions, e.g.
//!
//! ```json
//! {"arc_status": "Connected", "extensions_exists": 1,
//!  "extensions": [{"ExtensionName": "MDE.Windows", "ProvisioningState": "Succeeded"}],
//!  "type": "microsoft.hybridcompute/machines"}
//! ```

use arcmon_types::{CheckOutcome, Service, ServiceReport, Severity};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::CheckParams;
use crate::traits::CheckPlugin;

pub const PLUGIN_NAME: &str = "machine_extension";
pub const SECTION_NAME: &str = "azure_machine_extension";
pub const SERVICE_NAME: &str = "Azure machine extension";

/// Machine record decoded from the section's JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineExtensionSection {
    pub arc_status: String,
    pub extensions_exists: u32,
    pub extensions: Vec<ExtensionEntry>,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// One installed machine extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtensionEntry {
    pub extension_name: String,
    pub provisioning_state: String,
}

/// Severity mapping for the known extension provisioning states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineExtensionParams {
    pub succeeded: Severity,
    pub failed: Severity,
    pub canceled: Severity,
    pub creating: Severity,
    pub updating: Severity,
    pub deleting: Severity,
}

impl Default for MachineExtensionParams {
    fn default() -> Self {
        Self {
            succeeded: Severity::Ok,
            failed: Severity::Crit,
            canceled: Severity::Warn,
            creating: Severity::Ok,
            updating: Severity::Ok,
            deleting: Severity::Ok,
        }
    }
}

impl MachineExtensionParams {
    /// Configured severity for a recognized provisioning state (already
    /// lowercased). `None` for states outside the known vocabulary.
    pub fn severity_for(&self, state: &str) -> Option<Severity> {
        match state {
            "succeeded" => Some(self.succeeded),
            "failed" => Some(self.failed),
            "canceled" => Some(self.canceled),
            "creating" => Some(self.creating),
            "updating" => Some(self.updating),
            "deleting" => Some(self.deleting),
            _ => None,
        }
    }
}

/// Decode the machine record from the first payload line.
pub fn parse(lines: &[String]) -> Result<MachineExtensionSection> {
    let line = lines
        .first()
        .ok_or_else(|| Error::Parse(format!("section {} carried no payload line", SECTION_NAME)))?;
    Ok(serde_json::from_str(line)?)
}

/// One service per machine record, no item.
pub fn discover(_section: &MachineExtensionSection) -> Vec<Service> {
    vec![Service::default()]
}

/// Classify every extension and reduce to the worst severity.
///
/// Every entry lands in the summary list regardless of severity; entries
/// mapped to `Ok` appear as the bare extension name, everything else carries
/// its provisioning state. Both the summary list and the detail lines are
/// sorted lexicographically. A machine without extensions reports `Ok`.
pub fn check(params: &MachineExtensionParams, section: &MachineExtensionSection) -> CheckOutcome {
    let mut severities = Vec::with_capacity(section.extensions.len());
    let mut labels = Vec::with_capacity(section.extensions.len());
    let mut detail_lines = Vec::with_capacity(section.extensions.len());

    for extension in &section.extensions {
        let state = extension.provisioning_state.to_lowercase();
        let label = match params.severity_for(&state) {
            Some(severity) => {
                severities.push(severity);
                if severity == Severity::Ok {
                    extension.extension_name.clone()
                } else {
                    format!("{} ({})", extension.extension_name, state)
                }
            }
            None => {
                severities.push(Severity::Unknown);
                format!("{} ({} - undefined)", extension.extension_name, state)
            }
        };
        labels.push(label);
        detail_lines.push(format!("{} ({})", extension.extension_name, state));
    }

    labels.sort();
    detail_lines.sort();

    CheckOutcome::new(
        Severity::worst(severities),
        format!("Extensions: {}", labels.join(", ")),
    )
    .with_details(detail_lines.join("\n"))
}

/// Adapter wiring the stages into the driver contract.
#[derive(Debug)]
pub struct MachineExtensionPlugin;

impl CheckPlugin for MachineExtensionPlugin {
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
                outcome: check(&params.machine_extension, &section),
            })
            .collect();
        Ok(reports)
    }
}
