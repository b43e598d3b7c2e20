// Rust guideline compliant 2026-10-18

//! JSONL-backed order store.
//!
//! Orders are kept one JSON object per line. Every mutation rewrites the
//! whole file through a temp file and an atomic rename, so a failed write
//! never leaves a partially updated board behind.

use crate::identity::generate_unique_id;
use crate::store::{now, OrderStore};
use crate::{Error, Order, OrderDraft, Result};
use std::path::{Path, PathBuf};

/// Order store persisted to a JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
    /// Whether mutations hold an exclusive file lock.
    locking: bool,
}

impl JsonlStore {
    /// Creates a new store for the given file.
    ///
    /// The file does not need to exist yet; it is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            locking: false,
        })
    }

    /// Enables or disables exclusive locking around mutations.
    #[must_use]
    pub fn with_locking(mut self, locking: bool) -> Self {
        self.locking = locking;
        self
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JsonlStore {
    /// Loads all orders, one JSON record per line.
    ///
    /// Blank lines are ignored. A line that is not an order record is
    /// skipped with a warning and the records after it still load. A record
    /// that parses but breaks an order invariant (blank field, bad ID, ID
    /// already seen) fails the whole load, and no write happens until the
    /// file is repaired.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A well-formed record fails validation (`Error::Validation`)
    /// - Two records share an ID (`Error::DuplicateId`)
    pub fn load_all(&self) -> Result<Vec<Order>> {
        use std::collections::HashSet;
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut orders = Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Order>(&line) {
                Ok(order) => {
                    order.validate()?;
                    if !seen.insert(order.id.clone()) {
                        return Err(Error::DuplicateId(order.id));
                    }
                    orders.push(order);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping malformed order record"
                    );
                }
            }
        }

        Ok(orders)
    }

    /// Replaces the file contents with `orders`.
    ///
    /// # Errors
    ///
    /// Returns an error if any order fails validation or the file cannot be
    /// written and renamed.
    pub fn save_all(&self, orders: &[Order]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for order in orders {
            order.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for order in orders {
                let json = serde_json::to_string(order)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }

    fn mutate<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Order>) -> Result<T>,
    {
        let run = || -> Result<T> {
            let mut orders = self.load_all()?;
            let value = f(&mut orders)?;
            self.save_all(&orders)?;
            Ok(value)
        };

        if self.locking {
            self.with_lock(run)
        } else {
            run()
        }
    }
}

impl OrderStore for JsonlStore {
    fn create(&mut self, draft: OrderDraft) -> Result<String> {
        self.mutate(|orders| {
            let created_at = now();
            let id = generate_unique_id(&draft.text, &draft.table, created_at, |candidate| {
                orders.iter().any(|order| order.id == candidate)
            });
            let order = draft.into_order(id.clone(), created_at);
            order.validate()?;
            orders.push(order);
            Ok(id)
        })
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.load_all()?.into_iter().find(|order| order.id == id))
    }

    fn update(&mut self, order: &Order) -> Result<()> {
        order.validate()?;
        self.mutate(|orders| {
            let slot = orders
                .iter_mut()
                .find(|existing| existing.id == order.id)
                .ok_or_else(|| Error::OrderNotFound(order.id.clone()))?;
            *slot = order.clone();
            Ok(())
        })
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.mutate(|orders| {
            let initial_len = orders.len();
            orders.retain(|order| order.id != id);
            if orders.len() == initial_len {
                return Err(Error::OrderNotFound(id.to_string()));
            }
            Ok(())
        })
    }

    fn list(&self) -> Result<Vec<Order>> {
        self.load_all()
    }
}
