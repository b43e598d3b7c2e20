// Rust guideline compliant 2026-10-18

//! Implementation of the `obd move` command.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::Result;
use orderboard_core::Order;

/// Drops an order onto a column.
///
/// Moving an order onto its current column succeeds without a write.
///
/// # Errors
///
/// Returns an error if the order does not exist, the column tag is not a
/// board column, or the orders file cannot be written.
pub fn execute(
    workspace: &Workspace,
    id: String,
    column: String,
    formatter: &dyn OutputFormatter,
) -> Result<Order> {
    let mut board = workspace.board()?;
    let order = board.drag_end(&id, &column)?;

    println!("{}", formatter.format_order("move", &order));
    Ok(order)
}
