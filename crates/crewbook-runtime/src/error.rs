use std::fmt;

/// Result type for crewbook-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by record operations, export and backup.
#[derive(Debug)]
pub enum Error {
    /// A required field was blank or nothing was selected. Nothing was written.
    Validation(String),

    /// A company name or (company, crew code) pair already exists.
    Duplicate(String),

    /// Any other store failure, passed through with its message.
    Store(crewbook_store::Error),

    /// The typed confirmation for an irreversible action did not match.
    Confirmation(String),

    /// Backup archive could not be written, read, or lacked the store entry.
    Backup(String),

    /// The referenced row does not exist.
    NotFound(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV serialization failed
    Csv(csv::Error),
}

impl Error {
    /// Stable machine-readable label.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Duplicate(_) => "duplicate",
            Error::Store(_) => "store",
            Error::Confirmation(_) => "confirmation",
            Error::Backup(_) => "backup",
            Error::NotFound(_) => "not_found",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Csv(_) => "csv",
        }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Duplicate(msg) => write!(f, "{} already exists", msg),
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Confirmation(msg) => write!(f, "Not confirmed: {}", msg),
            Error::Backup(msg) => write!(f, "Backup error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Validation(_)
            | Error::Duplicate(_)
            | Error::Confirmation(_)
            | Error::Backup(_)
            | Error::NotFound(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<crewbook_store::Error> for Error {
    fn from(err: crewbook_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Backup(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = Error::Duplicate("Company 'Acme'".to_string());
        assert_eq!(err.to_string(), "Company 'Acme' already exists");
        assert_eq!(err.kind(), "duplicate");
    }

    #[test]
    fn test_store_error_keeps_source() {
        let err = Error::from(crewbook_store::Error::Query("bad".to_string()));
        assert_eq!(err.kind(), "store");
        assert!(std::error::Error::source(&err).is_some());
    }
}
