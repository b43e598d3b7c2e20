// Rust guideline compliant 2026-10-18

//! Orderboard CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use commands::Workspace;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::{paint, should_use_color};
