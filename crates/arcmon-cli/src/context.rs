use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use arcmon_agent::AgentSettings;
use arcmon_checks::CheckParams;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Lazily-loaded execution state shared by the command handlers.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(config_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            config_path,
            config: OnceCell::new(),
            format,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path))
    }

    pub fn params(&self) -> Result<&CheckParams> {
        Ok(&self.config()?.params)
    }

    pub fn agent_settings(&self) -> Result<&AgentSettings> {
        self.config()?.agent.as_ref().ok_or_else(|| {
            anyhow!(
                "no [agent] settings in {}: configure tenant_id, app_id and app_secret",
                self.config_path.display()
            )
        })
    }
}
