// Rust guideline compliant 2026-10-18

//! Error handling for Orderboard application services.

use orderboard_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and event responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required form field was missing.
    ValidationError,
    /// The referenced order does not exist.
    OrderNotFound,
    /// The target column is not one of the board columns.
    InvalidColumn,
    /// The store already holds an order with this ID.
    DuplicateId,
    /// A drop or drag-over arrived without a drag in progress.
    NoActiveDrag,
    /// IO failure while reading or writing board data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    ConfigError,
    /// The board directory has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Board directory is missing or not initialized.
    #[error("Orderboard not initialized at {path}. Run 'obd init' first.")]
    RepoNotInitialized {
        /// Path where `.orderboard` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A gesture event arrived while no drag was in progress.
    #[error("No drag in progress")]
    NoActiveDrag,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NoActiveDrag => ErrorCode::NoActiveDrag,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::OrderNotFound(_) => ErrorCode::OrderNotFound,
                CoreError::InvalidColumn(_) => ErrorCode::InvalidColumn,
                CoreError::DuplicateId(_) => ErrorCode::DuplicateId,
                CoreError::UnresolvedTarget(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns true if new input can correct the error, so an open form
    /// should stay open.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self.code(), ErrorCode::ValidationError)
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(core) => match core {
                CoreError::OrderNotFound(id) => Some(serde_json::json!({
                    "order_id": id,
                })),
                CoreError::InvalidColumn(tag) => Some(serde_json::json!({
                    "column": tag,
                    "allowed": orderboard_core::Column::ALL
                        .iter()
                        .map(|column| column.as_str())
                        .collect::<Vec<_>>(),
                })),
                _ => None,
            },
            _ => None,
        }
    }
}
