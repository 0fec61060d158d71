use std::fmt;

/// Result type for lifeline-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Persistence layer error
    Store(lifeline_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Card data or data directory could not be resolved
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<lifeline_store::Error> for Error {
    fn from(err: lifeline_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<lifeline_core::Error> for Error {
    fn from(err: lifeline_core::Error) -> Self {
        match err {
            lifeline_core::Error::Io(err) => Error::Io(err),
            lifeline_core::Error::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
