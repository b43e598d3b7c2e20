// Rust guideline compliant 2026-10-18

//! Implementation of the `obd add` command.
//!
//! Submits the add form: a new order with a fresh hash ID, placed in the
//! `Ordered` column unless a status is given.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::Result;
use orderboard_core::{FormSubmission, Order};

/// Adds a new order to the board.
///
/// # Arguments
///
/// * `workspace` - The initialized board
/// * `text` - What was ordered
/// * `table` - Table label
/// * `status` - Optional starting column tag
/// * `formatter` - Output formatter
///
/// # Returns
///
/// The created order.
///
/// # Errors
///
/// Returns an error if:
/// - Text or table is empty
/// - The status names no column
/// - The orders file cannot be written
pub fn execute(
    workspace: &Workspace,
    text: String,
    table: String,
    status: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<Order> {
    let mut submission = FormSubmission::create(text, table);
    submission.status = status;

    let mut board = workspace.board()?;
    let order = board.submit_form(submission)?;

    println!("{}", formatter.format_order("add", &order));
    Ok(order)
}
