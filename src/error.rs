use std::fmt;

/// Custom error type for platctl operations
#[derive(Debug)]
pub enum PlatError {
    /// No configuration context is currently selected
    MissingContext,
    /// A named context does not exist in the config file
    ContextNotFound {
        name: String,
        available: Vec<String>,
    },
    /// Configuration error
    Config(String),
    /// Config file is not valid JSON, or could not be serialized
    Json(String),
    /// Config file could not be read or written
    Io(String),
    /// Context URL is not usable
    InvalidUrl(String),
    /// The call scope was cancelled
    Cancelled,
    /// The call scope deadline passed
    DeadlineExceeded,
}

impl fmt::Display for PlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatError::MissingContext => write!(
                f,
                "Missing context; use \"platctl config set-context <name> --url <URL>\" to configure your context"
            ),
            PlatError::ContextNotFound { name, available } if available.is_empty() => {
                write!(f, "Context '{}' not found. No contexts configured", name)
            }
            PlatError::ContextNotFound { name, available } => write!(
                f,
                "Context '{}' not found. Available contexts: {}",
                name,
                available.join(", ")
            ),
            PlatError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PlatError::Json(msg) => write!(f, "JSON error: {}", msg),
            PlatError::Io(msg) => write!(f, "I/O error: {}", msg),
            PlatError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            PlatError::Cancelled => write!(f, "Operation cancelled"),
            PlatError::DeadlineExceeded => write!(f, "Operation timed out"),
        }
    }
}

impl std::error::Error for PlatError {}

impl From<serde_json::Error> for PlatError {
    fn from(err: serde_json::Error) -> Self {
        PlatError::Json(err.to_string())
    }
}

/// Result type alias for platctl operations
pub type Result<T> = std::result::Result<T, PlatError>;
