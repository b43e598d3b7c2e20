// Rust guideline compliant 2026-10-18

//! Implementation of the `obd init` command.
//!
//! Creates the `.orderboard` directory with an empty orders file and a
//! default configuration.

use crate::output::OutputFormatter;
use anyhow::Result;
use orderboard_app::RepoContext;
use std::path::Path;

/// Initializes a board under `root`.
///
/// Existing files are left untouched, so running it twice is harmless.
///
/// # Errors
///
/// Returns an error if:
/// - The current directory cannot be resolved
/// - The `.orderboard` directory or its files cannot be created
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let (context, created) = RepoContext::init(&root)?;

    let message = if created {
        format!(
            "Board initialized at {}",
            context.board_dir().display()
        )
    } else {
        format!(
            "Board already initialized at {}",
            context.board_dir().display()
        )
    };
    tracing::info!(path = %context.board_dir().display(), created, "init");
    println!("{}", formatter.format_message("init", &message));

    Ok(())
}
