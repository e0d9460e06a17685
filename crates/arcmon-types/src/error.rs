use std::fmt;

/// Result type for arcmon-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Severity level outside the supported range
    InvalidSeverity(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSeverity(level) => {
                write!(f, "invalid severity level {}: expected 0, 1, 2 or 3", level)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidSeverity(_) => None,
        }
    }
}
