//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, MinilogError>;

#[derive(Debug, thiserror::Error)]
pub enum MinilogError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File destination error with path
    #[error("File destination error for '{path}': {message}")]
    FileDestinationError { path: String, message: String },

    /// Numeric rank with no corresponding severity level
    #[error("Unknown severity rank: {0}")]
    UnknownRank(u32),

    /// Level name with no corresponding severity level
    #[error("Unknown severity name: '{0}'")]
    UnknownName(String),

    /// A destination panicked while writing
    #[error("Destination panicked: {0}")]
    Panicked(String),

    /// One or more destinations failed during fan-out.
    ///
    /// Dispatch continues past failing destinations; this collects what went
    /// wrong at each of them.
    #[error("Dispatch failed for {} destination(s)", .0.failures.len())]
    Dispatch(DispatchError),
}

/// Per-destination failures collected from a single `log` call.
#[derive(Debug)]
pub struct DispatchError {
    pub failures: Vec<DestinationFailure>,
}

/// A single destination's failure, identified by name and registration index.
#[derive(Debug)]
pub struct DestinationFailure {
    pub index: usize,
    pub destination: String,
    pub error: Box<MinilogError>,
}

impl MinilogError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        MinilogError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        MinilogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file destination error
    pub fn file_destination(path: impl Into<String>, message: impl Into<String>) -> Self {
        MinilogError::FileDestinationError {
            path: path.into(),
            message: message.into(),
        }
    }
}
