use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arcmon")]
#[command(about = "Evaluate Azure Arc monitoring checks from collected agent output", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "arcmon.toml", global = true)]
    pub config: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Check {
        #[arg(
            long,
            default_value = "-",
            help = "File holding the collected agent output, or '-' for stdin"
        )]
        input: String,
    },

    Agent {
        #[command(subcommand)]
        command: AgentCommand,
    },

    Plugins {
        #[command(subcommand)]
        command: PluginsCommand,
    },
}

#[derive(Subcommand)]
pub enum AgentCommand {
    Command {
        #[arg(long, help = "Print the real client secret instead of the placeholder")]
        reveal_secret: bool,
    },
}

#[derive(Subcommand)]
pub enum PluginsCommand {
    List,
}
