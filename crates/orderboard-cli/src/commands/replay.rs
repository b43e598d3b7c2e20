// Rust guideline compliant 2026-10-18

//! Implementation of the `obd replay` command.
//!
//! Feeds a JSON array of board events through the board controller, the way
//! an interactive surface would raise them one at a time. With the `layout`
//! host a pointer target is a layout node key such as `card:ord-1a2b3c:text`;
//! with the `recorded` host it is the captured node path, innermost first.

use crate::commands::Workspace;
use crate::output::OutputFormatter;
use anyhow::{bail, Context, Result};
use orderboard_app::{AppError, BoardEvent, BoardOutput, LayoutTree, RecordedPath};
use orderboard_core::PointerAncestry;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Pointer ancestry host used to interpret event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HostKind {
    /// Targets are keys of the rendered board layout.
    #[default]
    Layout,
    /// Targets carry their own node path.
    Recorded,
}

/// Replays the events stored in `file`.
///
/// A failing event is logged and skipped; later events still run. Outputs
/// of the events that succeeded are printed either way.
///
/// # Returns
///
/// The outputs of the successful events, in order.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or is not a JSON array of events
/// - Any event failed
pub fn execute(
    workspace: &Workspace,
    file: &Path,
    host: HostKind,
    formatter: &dyn OutputFormatter,
) -> Result<Vec<BoardOutput>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read events from {}", file.display()))?;

    let (outputs, failed, total) = match host {
        HostKind::Layout => run(workspace, LayoutTree::from_orders(&[]), &content)?,
        HostKind::Recorded => run(workspace, RecordedPath, &content)?,
    };

    println!("{}", formatter.format_outputs(&outputs));
    if failed > 0 {
        bail!("{} of {} events failed", failed, total);
    }
    Ok(outputs)
}

fn run<A>(
    workspace: &Workspace,
    host: A,
    content: &str,
) -> Result<(Vec<BoardOutput>, usize, usize)>
where
    A: PointerAncestry,
    A::Event: DeserializeOwned,
{
    let events: Vec<BoardEvent<A::Event>> = serde_json::from_str(content)
        .map_err(|e| AppError::InvalidInput(format!("event file: {}", e)))?;
    let total = events.len();

    let mut board = workspace.board_with::<A>(host)?;
    let mut outputs = Vec::with_capacity(total);
    let mut failed = 0;
    for (index, event) in events.into_iter().enumerate() {
        match board.handle(event) {
            Ok(output) => outputs.push(output),
            Err(e) => {
                failed += 1;
                tracing::warn!(index, code = ?e.code(), error = %e, "event failed");
            }
        }
    }

    Ok((outputs, failed, total))
}
