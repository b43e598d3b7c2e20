// Rust guideline compliant 2026-10-18

//! Transition engine for order status changes.
//!
//! The engine commits exactly one change per call against a store it
//! borrows from the application. Every operation validates its inputs and
//! resolves the target order before touching the store, and the store write
//! is the last step, so a failed call leaves the collection as it was.

use crate::models::require_field;
use crate::{Column, Error, Order, OrderDraft, OrderStore, Result};
use serde::{Deserialize, Serialize};

/// Whether a form submission creates a new order or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormMode {
    /// Add a new order.
    Create,
    /// Replace the record of an existing order.
    Edit {
        /// ID of the order being edited.
        order_id: String,
    },
}

/// Raw fields of a submitted add or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// Create or edit.
    #[serde(flatten)]
    pub mode: FormMode,
    /// Order description as typed.
    pub text: String,
    /// Table identifier as typed.
    pub table: String,
    /// Selected column, if the form offers one.
    #[serde(default)]
    pub status: Option<String>,
}

impl FormSubmission {
    /// Builds an add-form submission starting in the initial column.
    pub fn create(text: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Create,
            text: text.into(),
            table: table.into(),
            status: None,
        }
    }

    /// Builds an edit-form submission carrying the complete record.
    pub fn edit(
        order_id: impl Into<String>,
        text: impl Into<String>,
        table: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            mode: FormMode::Edit {
                order_id: order_id.into(),
            },
            text: text.into(),
            table: table.into(),
            status: Some(status.into()),
        }
    }
}

/// Applies drops, form submissions and deletions to an order store.
pub struct TransitionEngine<'a, S: OrderStore> {
    store: &'a mut S,
}

impl<'a, S: OrderStore> TransitionEngine<'a, S> {
    /// Creates an engine working against `store`.
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Moves an order to the column named by `target`.
    ///
    /// Dropping an order onto its current column returns it unchanged
    /// without writing.
    ///
    /// # Arguments
    ///
    /// * `order_id` - ID of the dropped order
    /// * `target` - Drop-area tag of the target column
    ///
    /// # Returns
    ///
    /// The order as stored after the move.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No order has `order_id` (`Error::OrderNotFound`)
    /// - `target` names no column (`Error::InvalidColumn`)
    /// - The store fails to persist the change
    pub fn apply_drop(&mut self, order_id: &str, target: &str) -> Result<Order> {
        let order = self.resolve(order_id)?;
        let column: Column = target.parse()?;
        order.status.can_transition_to(column)?;

        if order.status == column {
            tracing::debug!(order_id, column = %column, "drop onto current column");
            return Ok(order);
        }

        let from = order.status;
        let moved = Order {
            status: column,
            ..order
        };
        self.store.update(&moved)?;

        tracing::info!(order_id, from = %from, to = %column, "order moved");
        Ok(moved)
    }

    /// Applies a submitted add or edit form.
    ///
    /// Text and table are trimmed before validation and storage. A create
    /// starts in `Column::INITIAL` unless a status is supplied; an edit
    /// replaces text, table and status wholesale and keeps the ID and
    /// creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Text or table is blank, or an edit lacks a status (`Error::Validation`)
    /// - The edited order does not exist (`Error::OrderNotFound`)
    /// - The status names no column (`Error::InvalidColumn`)
    /// - The store fails to persist the change
    pub fn apply_form_edit(&mut self, submission: FormSubmission) -> Result<Order> {
        let FormSubmission {
            mode,
            text,
            table,
            status,
        } = submission;
        require_field("text", &text)?;
        require_field("table", &table)?;

        match mode {
            FormMode::Create => {
                let status = status.as_deref().map(str::parse::<Column>).transpose()?;
                let draft = OrderDraft {
                    text,
                    table,
                    status,
                };
                let id = self.store.create(draft)?;
                let order = self.resolve(&id)?;
                tracing::info!(order_id = %order.id, status = %order.status, "order created");
                Ok(order)
            }
            FormMode::Edit { order_id } => {
                let status = status.ok_or_else(|| {
                    Error::Validation("status is required when editing an order".to_string())
                })?;
                let existing = self.resolve(&order_id)?;
                let column: Column = status.parse()?;
                existing.status.can_transition_to(column)?;

                let edited = Order {
                    id: existing.id,
                    text: text.trim().to_string(),
                    table: table.trim().to_string(),
                    status: column,
                    created_at: existing.created_at,
                };
                self.store.update(&edited)?;
                tracing::info!(order_id = %edited.id, status = %edited.status, "order edited");
                Ok(edited)
            }
        }
    }

    /// Removes an order from the store.
    ///
    /// # Errors
    ///
    /// Returns `Error::OrderNotFound` if no order has `order_id`; this means
    /// the caller acted on a card the store does not know about.
    pub fn apply_delete(&mut self, order_id: &str) -> Result<()> {
        match self.store.delete(order_id) {
            Ok(()) => {
                tracing::info!(order_id, "order deleted");
                Ok(())
            }
            Err(Error::OrderNotFound(id)) => {
                tracing::warn!(order_id = %id, "delete requested for unknown order");
                Err(Error::OrderNotFound(id))
            }
            Err(e) => Err(e),
        }
    }

    fn resolve(&self, order_id: &str) -> Result<Order> {
        self.store.find_by_id(order_id)?.ok_or_else(|| {
            tracing::warn!(order_id, "order not found");
            Error::OrderNotFound(order_id.to_string())
        })
    }
}
