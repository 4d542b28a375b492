//! Error types and exit codes for skyroute
//!
//! The pathfinding engine itself never fails: unreachable targets and
//! unknown cities are ordinary results. Errors only arise at the edges,
//! while loading a network, reading configuration, or parsing user input.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse)
//! - 2: Usage error (bad flags/args, blank city names)
//! - 3: Data error (invalid network file, unknown city in strict mode)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid network, unknown city (3)
    Data = 3,
}

/// Errors that can occur outside the engine
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid network {path:?}: flight #{index}: {reason}")]
    InvalidFlight {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl RouteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RouteError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a flight record that violates the engine's preconditions
    pub fn invalid_flight(path: impl Into<PathBuf>, index: usize, reason: impl Into<String>) -> Self {
        RouteError::InvalidFlight {
            path: path.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. }
            | RouteError::Unsupported { .. } => ExitCode::Usage,

            RouteError::InvalidFlight { .. } | RouteError::NotFound { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Yaml(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::Unsupported { .. } => "unsupported",
            RouteError::InvalidFlight { .. } => "invalid_flight",
            RouteError::NotFound { .. } => "not_found",
            RouteError::Io(_) => "io_error",
            RouteError::Yaml(_) => "yaml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Render as a structured JSON error envelope
    pub fn to_json(&self) -> String {
        let envelope = serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        envelope.to_string()
    }
}

/// Result type alias for skyroute operations
pub type Result<T> = std::result::Result<T, RouteError>;
