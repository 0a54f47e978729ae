use std::fmt;
use std::io;

/// Error types for the host-side plumbing around the idle engine.
///
/// The engine itself never fails: ticks, selection and re-arming either act or
/// quietly do nothing. These errors come from loading configuration, seeding
/// the random source and reading operator commands.
#[derive(Debug)]
pub enum IdleError {
    /// The configuration file could not be read
    ConfigRead(io::Error),
    /// The configuration file is not valid JSON for `IdleConfig`
    ConfigParse(serde_json::Error),
    /// The operating system entropy source failed
    Entropy(getrandom::Error),
    /// A command line that matches no known command
    UnknownCommand(String),
    /// A timeout argument that is not a positive whole number of seconds
    InvalidTimeout(String),
    /// An animation name that is not in the catalog
    UnknownAnimation(String),
}

impl fmt::Display for IdleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdleError::ConfigRead(error) => write!(f, "Cannot read config: {}", error),
            IdleError::ConfigParse(error) => write!(f, "Cannot parse config: {}", error),
            IdleError::Entropy(error) => write!(f, "No entropy for random seed: {}", error),
            IdleError::UnknownCommand(command) => write!(f, "Unknown command: {}", command),
            IdleError::InvalidTimeout(value) => write!(f, "Invalid timeout value: {}", value),
            IdleError::UnknownAnimation(name) => write!(f, "Unknown animation: {}", name),
        }
    }
}

impl std::error::Error for IdleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdleError::ConfigRead(error) => Some(error),
            IdleError::ConfigParse(error) => Some(error),
            IdleError::Entropy(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for IdleError {
    fn from(error: io::Error) -> Self {
        IdleError::ConfigRead(error)
    }
}

impl From<serde_json::Error> for IdleError {
    fn from(error: serde_json::Error) -> Self {
        IdleError::ConfigParse(error)
    }
}

impl From<getrandom::Error> for IdleError {
    fn from(error: getrandom::Error) -> Self {
        IdleError::Entropy(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_entropy_failure_keeps_its_cause() {
        let error = IdleError::from(getrandom::Error::UNSUPPORTED);
        assert!(matches!(error, IdleError::Entropy(_)));
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("No entropy for random seed"));
    }

    #[test]
    fn test_parse_errors_have_no_cause() {
        let error = IdleError::UnknownCommand("jump100".to_string());
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "Unknown command: jump100");
    }
}
