// Rust guideline compliant 2026-10-18

//! Implementation of the `obd delete` command.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::Result;

/// Removes an order from the board.
///
/// # Errors
///
/// Returns an error if the order does not exist or the orders file cannot
/// be written.
pub fn execute(workspace: &Workspace, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut board = workspace.board()?;
    board.delete(&id)?;

    println!("{}", formatter.format_deleted(&id));
    Ok(())
}
