use std::fmt;

/// Result type for lifeline-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Encoding a value for storage failed
    Serialization(serde_json::Error),

    /// Store was written by a newer lifeline
    UnsupportedSchema { found: i32, supported: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
            Error::UnsupportedSchema { found, supported } => write!(
                f,
                "Store schema version {} is newer than supported version {}. Please upgrade lifeline.",
                found, supported
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Serialization(err) => Some(err),
            Error::UnsupportedSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_schema_message() {
        let err = Error::UnsupportedSchema {
            found: 7,
            supported: 1,
        };
        let msg = err.to_string();

        assert!(msg.contains("version 7"));
        assert!(msg.contains("upgrade lifeline"));
    }

    #[test]
    fn test_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("disk I/O error".to_string()),
        );
        let err = Error::Database(sqlite_err);

        assert!(err.to_string().starts_with("Database error:"));
    }
}
