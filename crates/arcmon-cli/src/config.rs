use anyhow::{Context, Result};
use arcmon_agent::AgentSettings;
use arcmon_checks::CheckParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level arcmon configuration.
///
/// ```toml
/// [agent]
/// tenant_id = "c28b2cb4-..."
/// app_id = "9d383612-..."
/// app_secret_env = "ARCMON_APP_SECRET"
///
/// [params.arc_state]
/// disconnected = 2
///
/// [params.machine_extension]
/// canceled = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: Option<AgentSettings>,
    pub params: CheckParams,
}

impl Config {
    /// Load configuration; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcmon_agent::ResourceFilter;
    use arcmon_types::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert!(config.agent.is_none());
        assert_eq!(config.params, CheckParams::default());
        Ok(())
    }

    #[test]
    fn load_full_configuration() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("arcmon.toml");
        fs::write(
            &config_path,
            r#"
[agent]
tenant_id = "c28b2cb4-1234-5678-9abc-def012345678"
app_id = "9d383612-8765-4321-cba9-876fed543210"
app_secret = "hunter2"
services_to_monitor = ["azure_arc_states"]
proxy = "http://proxy.example.com:3128"
timeout = 30.0

[agent.filter]
subscriptions = ["sub-1", "sub-2"]

[params.arc_state]
disconnected = 2

[params.machine_extension]
canceled = 2
"#,
        )?;

        let config = Config::load_from(&config_path)?;
        let agent = config.agent.expect("agent settings should be present");
        assert_eq!(agent.tenant_id, "c28b2cb4-1234-5678-9abc-def012345678");
        assert_eq!(
            agent.filter,
            Some(ResourceFilter::Subscriptions(vec![
                "sub-1".to_string(),
                "sub-2".to_string()
            ]))
        );
        assert_eq!(agent.timeout, Some(30.0));
        assert_eq!(config.params.arc_state.disconnected, Severity::Crit);
        assert_eq!(config.params.arc_state.connected, Severity::Ok);
        assert_eq!(config.params.machine_extension.canceled, Severity::Crit);
        assert_eq!(config.params.machine_extension.failed, Severity::Crit);
        Ok(())
    }

    #[test]
    fn params_only_configuration_leaves_agent_unset() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("arcmon.toml");
        fs::write(&config_path, "[params.arc_state]\nexpired = 2\n")?;

        let config = Config::load_from(&config_path)?;
        assert!(config.agent.is_none());
        assert_eq!(config.params.arc_state.expired, Severity::Crit);
        Ok(())
    }

    #[test]
    fn malformed_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("arcmon.toml");
        fs::write(&config_path, "[params.arc_state\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
        Ok(())
    }

    #[test]
    fn out_of_range_severity_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("arcmon.toml");
        fs::write(&config_path, "[params.arc_state]\nconnected = 7\n")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("arcmon.toml"), PathBuf::from("arcmon.toml"));
        assert_eq!(expand_tilde("/etc/arcmon.toml"), PathBuf::from("/etc/arcmon.toml"));
    }
}
