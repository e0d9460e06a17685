use crate::error::Result;
use crate::secret::{REDACTED, Secret};
use crate::settings::{AgentSettings, ResourceFilter};

/// One argument of the agent invocation.
///
/// Secret material stays wrapped until a call site renders it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArg {
    Plain(String),
    Secret(Secret),
}

impl CommandArg {
    fn plain(value: impl Into<String>) -> Self {
        CommandArg::Plain(value.into())
    }

    /// Render for display. Secret material is replaced with the placeholder
    /// unless `reveal` is set.
    pub fn render(&self, reveal: bool) -> String {
        match self {
            CommandArg::Plain(value) => value.clone(),
            CommandArg::Secret(secret) if reveal => secret.expose().to_string(),
            CommandArg::Secret(_) => REDACTED.to_string(),
        }
    }
}

/// Build the agent's argument list from validated settings.
///
/// `proxy` and `timeout` tune the agent's HTTP client and never appear in
/// the argument list.
pub fn build_command(settings: &AgentSettings) -> Result<Vec<CommandArg>> {
    settings.validate()?;
    let secret = settings.resolve_secret()?;

    let mut args = vec![
        CommandArg::plain("--tenant-id"),
        CommandArg::plain(&settings.tenant_id),
        CommandArg::plain("--app-id"),
        CommandArg::plain(&settings.app_id),
        CommandArg::plain("--app-secret"),
        CommandArg::Secret(secret),
    ];

    args.push(CommandArg::plain("--services-to-monitor"));
    args.push(CommandArg::plain(
        settings
            .services_to_monitor
            .iter()
            .map(|service| service.as_str())
            .collect::<Vec<_>>()
            .join(","),
    ));

    match &settings.filter {
        Some(ResourceFilter::Subscriptions(ids)) => {
            args.push(CommandArg::plain("--filter-subscriptions"));
            args.push(CommandArg::plain(ids.join(",")));
        }
        Some(ResourceFilter::ManagementGroups(ids)) => {
            args.push(CommandArg::plain("--filter-management-groups"));
            args.push(CommandArg::plain(ids.join(",")));
        }
        None => {}
    }

    Ok(args)
}
