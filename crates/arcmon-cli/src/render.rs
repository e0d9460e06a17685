use crate::types::OutputFormat;
use anyhow::Result;
use arcmon_types::{HostReport, ServiceReport, Severity};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Print a host report in the selected output format.
///
/// Plain output is one line per service in the classic monitoring shape
/// (`<service>: <SEVERITY> - <summary>`) with detail lines indented below.
pub fn print_host_report(report: &HostReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            for service in &report.services {
                print!("{}", format_service(service, color));
            }
        }
    }
    Ok(())
}

/// Render one service line plus its indented detail lines.
pub fn format_service(report: &ServiceReport, color: bool) -> String {
    let severity = severity_label(report.outcome.severity, color);
    let mut out = match &report.item {
        Some(item) => format!(
            "{} {}: {} - {}\n",
            report.service, item, severity, report.outcome.summary
        ),
        None => format!("{}: {} - {}\n", report.service, severity, report.outcome.summary),
    };

    for line in report.outcome.details.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn severity_label(severity: Severity, color: bool) -> String {
    if !color {
        return severity.to_string();
    }
    match severity {
        Severity::Ok => severity.green().to_string(),
        Severity::Warn => severity.yellow().to_string(),
        Severity::Crit => severity.red().to_string(),
        Severity::Unknown => severity.magenta().to_string(),
    }
}
