use crate::context::ExecutionContext;
use crate::render;
use anyhow::{Context, Result};
use arcmon_engine::evaluate;
use std::io::Read;
use tracing::debug;

/// Evaluate the registered check plugins over one host's collected agent
/// output and print the per-service results. The returned exit code is the
/// worst severity level across all services.
pub fn handle(ctx: &ExecutionContext, input: &str) -> Result<i32> {
    let payload = read_input(input)?;
    debug!(bytes = payload.len(), "read agent output");

    let report = evaluate(&payload, ctx.params()?);
    render::print_host_report(&report, ctx.format)?;
    Ok(report.exit_code())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read agent output from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read agent output from {}", input))
    }
}
