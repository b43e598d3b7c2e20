// Rust guideline compliant 2026-10-18

//! Board directory discovery and path management utilities.

use crate::error::{AppError, Result};
use orderboard_core::{Config, JsonlStore};
use std::path::{Path, PathBuf};

/// Name of the directory holding board data.
pub const BOARD_DIR: &str = ".orderboard";

/// Path metadata for an Orderboard workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    board_dir: PathBuf,
    orders_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    /// Resolves the paths for a board rooted at `root` without checking
    /// that they exist.
    pub fn at(root: &Path) -> Self {
        let board_dir = root.join(BOARD_DIR);
        Self {
            root: root.to_path_buf(),
            orders_path: board_dir.join("orders.jsonl"),
            config_path: board_dir.join("config.toml"),
            board_dir,
        }
    }

    /// Discovers a board starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root directory, the current directory otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.orderboard` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(&root);
        if !context.board_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.board_dir,
            });
        }
        Ok(context)
    }

    /// Creates the board directory, an empty orders file and a default
    /// config, leaving existing files alone.
    ///
    /// # Returns
    ///
    /// True if anything was created.
    ///
    /// # Errors
    ///
    /// Returns an error if a file or directory cannot be created.
    pub fn init(root: &Path) -> Result<(Self, bool)> {
        let context = Self::at(root);
        let mut created = false;

        if !context.board_dir.exists() {
            std::fs::create_dir_all(&context.board_dir)?;
            created = true;
        }
        if !context.orders_path.exists() {
            std::fs::File::create(&context.orders_path)?;
            created = true;
        }
        if !context.config_path.exists() {
            Config::default().save(&context.board_dir)?;
            created = true;
        }

        Ok((context, created))
    }

    /// Returns the root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.orderboard` directory path.
    #[must_use]
    pub fn board_dir(&self) -> &Path {
        self.board_dir.as_path()
    }

    /// Returns the orders JSONL path.
    #[must_use]
    pub fn orders_path(&self) -> &Path {
        self.orders_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the order store, locking writes if the config asks for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_store(&self, config: &Config) -> Result<JsonlStore> {
        Ok(JsonlStore::new(self.orders_path.clone())?.with_locking(config.lock_store))
    }

    /// Loads board configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.board_dir())?)
    }
}
