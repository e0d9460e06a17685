mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod render;
pub mod types;

use tracing_subscriber::EnvFilter;

pub use args::{AgentCommand, Cli, Commands, PluginsCommand};
pub use commands::run;

/// Install the tracing subscriber for CLI diagnostics.
///
/// Diagnostics go to stderr so check output on stdout stays clean. The
/// `ARCMON_LOG` environment variable overrides the `--log-level` flag.
pub fn init_tracing(level: types::LogLevel) {
    let filter = EnvFilter::try_from_env("ARCMON_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
