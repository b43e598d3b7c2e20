// Rust guideline compliant 2026-10-18

//! Shared application services for Orderboard.
//!
//! This crate connects an interaction surface to the core: the board
//! controller dispatching gesture and form events, pointer ancestry hosts,
//! column views, stable error codes and response envelopes.

pub mod ancestry;
pub mod board;
pub mod error;
pub mod repo;
pub mod response;
pub mod view;

pub use ancestry::{LayoutTree, RecordedPath};
pub use board::{Board, BoardEvent, BoardOutput, DropOutcome};
pub use error::{AppError, ErrorCode, Result};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use view::{BoardView, ColumnView};
