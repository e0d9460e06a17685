use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Monitoring severity of a check result.
///
/// Declaration order doubles as the aggregation rank: `Ok` is the best
/// outcome and `Unknown` the worst, so the derived `Ord` makes `max` the
/// worst-of reduction.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    #[default]
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl Severity {
    /// Numeric level used in configuration files and serialized reports.
    pub fn level(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warn => 1,
            Severity::Crit => 2,
            Severity::Unknown => 3,
        }
    }

    /// Process exit code reported to the monitoring host.
    pub fn exit_code(self) -> i32 {
        i32::from(self.level())
    }

    /// Reduce a set of severities to the worst one.
    ///
    /// An empty set reduces to `Ok`: nothing evaluated means nothing wrong.
    pub fn worst<I>(severities: I) -> Severity
    where
        I: IntoIterator<Item = Severity>,
    {
        severities.into_iter().max().unwrap_or(Severity::Ok)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Ok => "OK",
            Severity::Warn => "WARNING",
            Severity::Crit => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Severity::Ok),
            1 => Ok(Severity::Warn),
            2 => Ok(Severity::Crit),
            3 => Ok(Severity::Unknown),
            other => Err(Error::InvalidSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}
