// Rust guideline compliant 2026-10-18

//! Error types for the Orderboard core library.

use thiserror::Error;

/// Result type alias for Orderboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Orderboard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field was missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No order exists with the given identifier.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The column tag is not one of the board columns.
    #[error("Invalid column: {0:?}")]
    InvalidColumn(String),

    /// An order with this identifier is already stored.
    #[error("Duplicate order ID: {0}")]
    DuplicateId(String),

    /// The host could not map a pointer event to a rendered node.
    #[error("Unresolved event target: {0}")]
    UnresolvedTarget(String),

    /// Configuration could not be read or failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
