use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::secret::Secret;

static GUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

pub const MIN_TIMEOUT_SECS: f64 = 3.0;
pub const MAX_TIMEOUT_SECS: f64 = 600.0;

/// Azure service families the collection agent can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoredService {
    AzureArcStates,
    AzureArcExtensions,
    AzureVmExtensions,
}

impl MonitoredService {
    pub fn as_str(self) -> &'static str {
        match self {
            MonitoredService::AzureArcStates => "azure_arc_states",
            MonitoredService::AzureArcExtensions => "azure_arc_extensions",
            MonitoredService::AzureVmExtensions => "azure_vm_extensions",
        }
    }

    /// Every queryable service, in the order the agent expects them.
    pub fn all() -> [MonitoredService; 3] {
        [
            MonitoredService::AzureArcStates,
            MonitoredService::AzureArcExtensions,
            MonitoredService::AzureVmExtensions,
        ]
    }
}

impl fmt::Display for MonitoredService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restriction of the agent query to a subset of the tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFilter {
    Subscriptions(Vec<String>),
    ManagementGroups(Vec<String>),
}

/// Connection settings for the collection agent.
///
/// `app_secret_env` names an environment variable holding the client secret;
/// it takes precedence over the inline `app_secret` so deployments can keep
/// the secret out of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    pub tenant_id: String,
    pub app_id: String,
    #[serde(default)]
    pub app_secret: Option<Secret>,
    #[serde(default)]
    pub app_secret_env: Option<String>,
    #[serde(default = "default_services_to_monitor")]
    pub services_to_monitor: Vec<MonitoredService>,
    #[serde(default)]
    pub filter: Option<ResourceFilter>,
    /// HTTP(S) proxy for the agent's API traffic.
    #[serde(default)]
    pub proxy: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<f64>,
}

fn default_services_to_monitor() -> Vec<MonitoredService> {
    MonitoredService::all().to_vec()
}

impl AgentSettings {
    /// Check the settings against the agent's acceptance rules.
    pub fn validate(&self) -> Result<()> {
        if !GUID_PATTERN.is_match(&self.tenant_id) {
            return Err(Error::Validation(
                "Tenant ID / Directory ID must be in 36-character GUID format".to_string(),
            ));
        }
        if !GUID_PATTERN.is_match(&self.app_id) {
            return Err(Error::Validation(
                "Client ID / Application ID must be in 36-character GUID format".to_string(),
            ));
        }
        self.resolve_secret()?;
        if self.services_to_monitor.is_empty() {
            return Err(Error::Validation(
                "select at least one Azure service to monitor".to_string(),
            ));
        }
        if let Some(timeout) = self.timeout
            && !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&timeout)
        {
            return Err(Error::Validation(format!(
                "timeout {}s is out of range: expected {} to {} seconds",
                timeout, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
            )));
        }
        Ok(())
    }

    /// Resolve the client secret. The environment variable wins over the
    /// inline value when both are set.
    pub fn resolve_secret(&self) -> Result<Secret> {
        if let Some(env_name) = &self.app_secret_env
            && let Ok(value) = std::env::var(env_name)
            && !value.trim().is_empty()
        {
            return Ok(Secret::new(value));
        }
        if let Some(secret) = &self.app_secret
            && !secret.is_empty()
        {
            return Ok(secret.clone());
        }
        Err(Error::Validation(
            "client secret is not set: provide app_secret or app_secret_env".to_string(),
        ))
    }
}
