// Error types
pub mod error;

// Client secret handling
pub mod secret;

// Agent connection settings
pub mod settings;

// Agent invocation builder
pub mod command;

pub use command::{CommandArg, build_command};
pub use error::{Error, Result};
pub use secret::{REDACTED, Secret};
pub use settings::{AgentSettings, MonitoredService, ResourceFilter};
