// Rust guideline compliant 2026-10-18

//! Finite State Machine module for order status transitions.
//!
//! The states are the board columns and the initial state is
//! `Column::INITIAL`. Every column is reachable from every other column and
//! no column is terminal: an order can be moved back and forth until it is
//! deleted. The engine consults this module before committing a move.

use crate::{Column, Result};

impl Column {
    /// Checks if a transition to the target column is valid.
    ///
    /// Moving to the current column is accepted as a no-op.
    ///
    /// # Errors
    ///
    /// Never fails: all columns are mutually reachable.
    pub fn can_transition_to(&self, _target: Column) -> Result<()> {
        Ok(())
    }

    /// Returns the columns an order in this column can be moved to.
    pub fn valid_transitions(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| column != self)
            .collect()
    }
}
