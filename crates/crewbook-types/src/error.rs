use std::fmt;

/// Result type for crewbook-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value did not match any accepted spelling of an enumeration
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVariant {
                kind,
                value,
                expected,
            } => write!(
                f,
                "Unknown {} '{}' (expected one of: {})",
                kind,
                value,
                expected.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {}
