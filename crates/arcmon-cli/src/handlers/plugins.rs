use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use anyhow::Result;
use arcmon_checks::all_plugins;

/// List the registered check plugins with their section and service names.
pub fn handle(ctx: &ExecutionContext) -> Result<i32> {
    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(all_plugins())?);
        }
        OutputFormat::Plain => {
            for meta in all_plugins() {
                println!(
                    "{:<20} section={:<26} service={}",
                    meta.name, meta.section, meta.service
                );
            }
        }
    }
    Ok(0)
}
