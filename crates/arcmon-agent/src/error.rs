use std::fmt;

/// Result type for arcmon-agent operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the agent layer
#[derive(Debug)]
pub enum Error {
    /// Settings violated the agent's acceptance rules
    Validation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(_) => None,
        }
    }
}
