//! Issue severities

use std::fmt;
use std::str::FromStr;

/// Severity of a hint or validator issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Unknown,
    Pedantic,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Pedantic => "pedantic",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Numeric weight, higher is more severe
    pub fn rank(self) -> u8 {
        match self {
            Severity::Unknown => 0,
            Severity::Pedantic => 1,
            Severity::Info => 2,
            Severity::Warning => 3,
            Severity::Error => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "pedantic" => Severity::Pedantic,
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Severity::Error.rank() > Severity::Warning.rank());
        assert!(Severity::Warning.rank() > Severity::Info.rank());
        assert!(Severity::Info.rank() > Severity::Pedantic.rank());
        assert!(Severity::Pedantic.rank() > Severity::Unknown.rank());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Unknown);
    }
}
