use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for service-version operations
#[derive(Error, Debug)]
pub enum ServiceVersionError {
    #[error("Cannot read '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Manifest schema error: {0}")]
    Schema(String),

    #[error("Argument error: {0}")]
    Argument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in service-version
pub type Result<T> = std::result::Result<T, ServiceVersionError>;

impl ServiceVersionError {
    /// Create a file access error for the given path
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ServiceVersionError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        ServiceVersionError::Parse(msg.into())
    }

    /// Create a manifest schema error with context
    pub fn schema(msg: impl Into<String>) -> Self {
        ServiceVersionError::Schema(msg.into())
    }

    /// Create an argument error with context
    pub fn argument(msg: impl Into<String>) -> Self {
        ServiceVersionError::Argument(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ServiceVersionError::Config(msg.into())
    }
}

impl From<serde_json::Error> for ServiceVersionError {
    fn from(err: serde_json::Error) -> Self {
        ServiceVersionError::Parse(format!("invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceVersionError::schema("missing 'version' field");
        assert_eq!(
            err.to_string(),
            "Manifest schema error: missing 'version' field"
        );
    }

    #[test]
    fn test_file_access_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ServiceVersionError::file_access("package.json", io_err);
        assert_eq!(err.to_string(), "Cannot read 'package.json'");
    }

    #[test]
    fn test_file_access_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ServiceVersionError::file_access("/etc/shadow", io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: ServiceVersionError = json_err.into();
        assert!(matches!(err, ServiceVersionError::Parse(_)));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ServiceVersionError::parse("x"), "Parse error"),
            (ServiceVersionError::schema("x"), "Manifest schema error"),
            (ServiceVersionError::argument("x"), "Argument error"),
            (ServiceVersionError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ServiceVersionError::parse(""),
            ServiceVersionError::schema(""),
            ServiceVersionError::argument(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
