use arcmon_checks::{CheckParams, registry};
use arcmon_types::{CheckOutcome, HostReport, RawSection, Severity, ServiceReport};
use tracing::debug;

use crate::sections::split_sections;

/// Evaluate every registered check plugin against one host's agent output.
///
/// Reports come out in registry order. A decoding fault inside one section
/// degrades that plugin's service to `UNKNOWN` and carries the fault text;
/// the remaining sections still evaluate. Sections without a registered
/// plugin are skipped.
pub fn evaluate_host(input: &str, params: &CheckParams) -> HostReport {
    let sections = split_sections(input);
    let mut report = HostReport::default();

    for plugin in registry::create_all_plugins() {
        let Some(section) = sections.iter().find(|s| s.name == plugin.section_name()) else {
            debug!(
                plugin = plugin.name(),
                section = plugin.section_name(),
                "section not present in agent output"
            );
            continue;
        };

        match plugin.evaluate(&section.lines, params) {
            Ok(reports) => {
                for service_report in reports {
                    report.push(service_report);
                }
            }
            Err(err) => {
                debug!(plugin = plugin.name(), error = %err, "section failed to decode");
                report.push(ServiceReport {
                    plugin: plugin.name().to_string(),
                    service: plugin.service_name().to_string(),
                    item: None,
                    outcome: CheckOutcome::new(
                        Severity::Unknown,
                        format!("Failed to decode agent section: {}", err),
                    ),
                });
            }
        }
    }

    log_unhandled_sections(&sections);
    report
}

fn log_unhandled_sections(sections: &[RawSection]) {
    for section in sections {
        if registry::find_plugin_for_section(&section.name).is_none() {
            debug!(section = %section.name, "no plugin registered for section");
        }
    }
}
