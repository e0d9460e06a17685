use crate::context::ExecutionContext;
use anyhow::Result;
use arcmon_agent::build_command;

/// Print the collection-agent invocation built from the configured settings,
/// one argument per line. The client secret stays redacted unless
/// `--reveal-secret` is passed.
pub fn handle(ctx: &ExecutionContext, reveal_secret: bool) -> Result<i32> {
    let settings = ctx.agent_settings()?;
    let args = build_command(settings)?;

    for arg in &args {
        println!("{}", arg.render(reveal_secret));
    }
    Ok(0)
}
