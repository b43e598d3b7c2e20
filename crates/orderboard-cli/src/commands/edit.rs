// Rust guideline compliant 2026-10-18

//! Implementation of the `obd edit` command.
//!
//! Mirrors the edit form: fields start out filled from the stored order,
//! flags overwrite them, and the complete record is submitted.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::Result;
use orderboard_app::AppError;
use orderboard_core::{Error as CoreError, FormSubmission, Order, OrderStore};

/// Edits an existing order.
///
/// # Arguments
///
/// * `workspace` - The initialized board
/// * `id` - Order ID
/// * `text` - New text, the stored text otherwise
/// * `table` - New table, the stored table otherwise
/// * `status` - New column tag, the stored column otherwise
/// * `formatter` - Output formatter
///
/// # Returns
///
/// The order as stored after the edit.
///
/// # Errors
///
/// Returns an error if:
/// - The order does not exist
/// - A field is empty or the status names no column
/// - The orders file cannot be written
pub fn execute(
    workspace: &Workspace,
    id: String,
    text: Option<String>,
    table: Option<String>,
    status: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<Order> {
    let mut board = workspace.board()?;
    let current = board
        .store()
        .find_by_id(&id)
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::from(CoreError::OrderNotFound(id.clone())))?;

    let submission = FormSubmission::edit(
        id,
        text.unwrap_or(current.text),
        table.unwrap_or(current.table),
        status.unwrap_or_else(|| current.status.to_string()),
    );
    let order = board.submit_form(submission)?;

    println!("{}", formatter.format_order("edit", &order));
    Ok(order)
}
