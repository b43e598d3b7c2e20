// Rust guideline compliant 2026-10-18

//! Implementation of the `obd board` command.
//!
//! Renders every column with its cards, oldest first.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::Result;
use orderboard_app::BoardView;

/// Prints the board.
///
/// # Errors
///
/// Returns an error if the orders file cannot be read.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<BoardView> {
    let view = workspace.board()?.view()?;
    println!("{}", formatter.format_board(&view));
    Ok(view)
}
