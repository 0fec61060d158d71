use std::fmt;

/// Result type for lifeline-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A category tag did not name any known category
    UnknownCategory { kind: &'static str, tag: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory { kind, tag } => {
                write!(f, "Unknown {} category: '{}'", kind, tag)
            }
        }
    }
}

impl std::error::Error for Error {}
