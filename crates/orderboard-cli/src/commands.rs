// Rust guideline compliant 2026-10-18

//! CLI command implementations.

use anyhow::Result;
use orderboard_app::{Board, LayoutTree, RepoContext};
use orderboard_core::{Config, JsonlStore};
use std::path::Path;

pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod init;
pub mod move_order;
pub mod replay;

/// An initialized board directory with its loaded configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Paths of the board files.
    pub context: RepoContext,
    /// Effective configuration.
    pub config: Config,
}

impl Workspace {
    /// Discovers the board under `root` and loads its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is not initialized or the config is
    /// invalid.
    pub fn open(root: Option<&Path>) -> Result<Self> {
        let context = RepoContext::discover(root)?;
        let config = context.load_config()?;
        Ok(Self { context, config })
    }

    /// Opens the stored orders behind the terminal layout host.
    ///
    /// # Errors
    ///
    /// Returns an error if the orders file cannot be read.
    pub fn board(&self) -> Result<Board<JsonlStore, LayoutTree>> {
        self.board_with(LayoutTree::from_orders(&[]))
    }

    /// Opens the stored orders behind a specific pointer ancestry host.
    ///
    /// # Errors
    ///
    /// Returns an error if the orders file cannot be read.
    pub fn board_with<A: orderboard_core::PointerAncestry>(
        &self,
        host: A,
    ) -> Result<Board<JsonlStore, A>> {
        let store = self.context.open_store(&self.config)?;
        Ok(Board::open(store, host)?)
    }
}
