use super::args::{AgentCommand, Cli, Commands, PluginsCommand};
use super::handlers;
use crate::config::expand_tilde;
use crate::context::ExecutionContext;
use anyhow::Result;
use std::path::Path;

pub fn run(cli: Cli) -> Result<i32> {
    let config_path = expand_tilde(&cli.config);

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(0);
    };

    let ctx = ExecutionContext::new(config_path, cli.format);

    match command {
        Commands::Check { input } => handlers::check::handle(&ctx, &input),

        Commands::Agent { command } => match command {
            AgentCommand::Command { reveal_secret } => handlers::agent::handle(&ctx, reveal_secret),
        },

        Commands::Plugins { command } => match command {
            PluginsCommand::List => handlers::plugins::handle(&ctx),
        },
    }
}

fn show_guidance(config_path: &Path) {
    println!("arcmon - Azure Arc monitoring checks\n");

    if !config_path.exists() {
        println!(
            "No configuration found at {}; built-in severity defaults apply.\n",
            config_path.display()
        );
    }

    println!("Quick commands:");
    println!("  arcmon check --input agent.txt    # Evaluate collected agent output");
    println!("  arcmon check --input -            # Same, reading stdin");
    println!("  arcmon agent command              # Print the collection-agent invocation");
    println!("  arcmon plugins list               # List registered check plugins\n");

    println!("For more commands:");
    println!("  arcmon --help");
}
