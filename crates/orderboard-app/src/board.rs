// Rust guideline compliant 2026-10-18

//! Board controller.
//!
//! The board owns the order store, the pointer ancestry host and the drag
//! session of the gesture in progress. The host raises gesture and form
//! events one at a time and each handler runs to completion, so the store
//! needs no locking of its own.

use crate::error::{AppError, Result};
use crate::view::BoardView;
use orderboard_core::{
    resolve_column, update_dragging_state, DragSession, FormSubmission, Order, OrderStore,
    PointerAncestry, TransitionEngine,
};
use serde::{Deserialize, Serialize};

/// Result of ending a drag gesture with a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The order was committed to the column under the pointer.
    Moved(Order),
    /// The pointer was over no column; nothing changed.
    Cancelled,
}

/// Events raised by the interaction surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent<E> {
    /// A card started being dragged.
    DragStart {
        /// ID of the dragged order.
        order_id: String,
    },
    /// The pointer moved over a node while dragging.
    DragOver {
        /// Host-specific pointer target.
        target: E,
    },
    /// The card was released.
    Drop {
        /// Host-specific pointer target.
        target: E,
    },
    /// A card was dropped onto a known column.
    DragEnd {
        /// ID of the dropped order.
        order_id: String,
        /// Tag of the target column.
        column: String,
    },
    /// The gesture ended without a drop.
    DragCancel,
    /// The add or edit form was submitted.
    FormSubmit {
        /// Submitted fields.
        form: FormSubmission,
    },
    /// The delete button of a card was pressed.
    DeleteRequest {
        /// ID of the order to delete.
        order_id: String,
    },
}

/// What the view has to react to after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardOutput {
    /// A drag gesture began.
    DragStarted {
        /// ID of the dragged order.
        order_id: String,
    },
    /// Column to highlight while dragging.
    Highlight {
        /// Highlighted column tag, if any.
        column: Option<String>,
        /// Whether the highlight differs from before the event.
        changed: bool,
    },
    /// A drop committed a new status.
    Moved {
        /// The order after the move.
        order: Order,
    },
    /// A gesture ended without a commit.
    Cancelled {
        /// ID of the order that was being dragged, if any.
        order_id: Option<String>,
    },
    /// A form submission was stored.
    Saved {
        /// The created or edited order.
        order: Order,
    },
    /// An order was removed.
    Deleted {
        /// ID of the removed order.
        order_id: String,
    },
}

/// Board controller tying the interaction surface to the transition engine.
pub struct Board<S: OrderStore, A: PointerAncestry> {
    store: S,
    host: A,
    session: Option<DragSession>,
}

impl<S: OrderStore, A: PointerAncestry> Board<S, A> {
    /// Opens a board over `store`, rendering its orders through `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: S, host: A) -> Result<Self> {
        let mut board = Self {
            store,
            host,
            session: None,
        };
        board.refresh()?;
        Ok(board)
    }

    /// Returns the order store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the pointer ancestry host.
    pub fn host(&self) -> &A {
        &self.host
    }

    /// Returns the drag session of the gesture in progress.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns the column tag to highlight, if a drag is hovering one.
    pub fn highlighted(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|session| session.current_column.as_deref())
    }

    /// Groups the stored orders into columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn view(&self) -> Result<BoardView> {
        Ok(BoardView::from_orders(self.store.list()?))
    }

    /// Begins a drag gesture for an order, replacing any stale session.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist.
    pub fn drag_start(&mut self, order_id: &str) -> Result<()> {
        if self.store.find_by_id(order_id)?.is_none() {
            return Err(orderboard_core::Error::OrderNotFound(order_id.to_string()).into());
        }
        if let Some(stale) = self.session.replace(DragSession::start(order_id)) {
            tracing::debug!(order_id = %stale.dragged_order_id, "replacing unfinished drag");
        }
        tracing::debug!(order_id, "drag started");
        Ok(())
    }

    /// Feeds a pointer-over event to the drag resolver.
    ///
    /// A path without a drop area leaves the current target in place, so
    /// crossing the gap between columns does not flicker the highlight.
    ///
    /// # Returns
    ///
    /// The new column tag if the highlight changed, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if no drag is in progress or the host cannot resolve
    /// the event target.
    pub fn drag_over(&mut self, event: &A::Event) -> Result<Option<String>> {
        let session = self.session.take().ok_or(AppError::NoActiveDrag)?;
        let path = match self.host.event_path(event) {
            Ok(path) => path,
            Err(e) => {
                self.session = Some(session);
                return Err(e.into());
            }
        };

        let Some(over) = resolve_column(&path) else {
            tracing::trace!("drag over untagged node");
            self.session = Some(session);
            return Ok(None);
        };

        let changed = session.current_column.as_deref() != Some(over);
        let over = over.to_string();
        self.session = Some(update_dragging_state(session, &over));
        if changed {
            tracing::debug!(column = %over, "drag target changed");
            return Ok(Some(over));
        }
        Ok(None)
    }

    /// Ends the gesture with a drop.
    ///
    /// The column is resolved from the drop event itself. A drop outside
    /// every column cancels the gesture without touching the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No drag is in progress
    /// - The host cannot resolve the event target
    /// - The transition engine rejects the move
    pub fn drop(&mut self, event: &A::Event) -> Result<DropOutcome> {
        let session = self.session.take().ok_or(AppError::NoActiveDrag)?;
        let path = self.host.event_path(event)?;

        let Some(tag) = resolve_column(&path) else {
            tracing::debug!(order_id = %session.dragged_order_id, "drop outside any column");
            return Ok(DropOutcome::Cancelled);
        };

        self.drag_end(&session.dragged_order_id, tag)
            .map(DropOutcome::Moved)
    }

    /// Commits a drop whose target column the host already knows.
    ///
    /// Ends any gesture in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist, the column tag names no
    /// column, or the store cannot persist the move.
    pub fn drag_end(&mut self, order_id: &str, column: &str) -> Result<Order> {
        self.session = None;
        let order = TransitionEngine::new(&mut self.store).apply_drop(order_id, column)?;
        self.refresh_after_commit();
        Ok(order)
    }

    /// Ends the gesture without a drop.
    ///
    /// # Returns
    ///
    /// The session that was in progress, if any.
    pub fn cancel_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Applies a submitted add or edit form.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition engine rejects the submission;
    /// check [`AppError::is_recoverable`] to decide whether to keep the form
    /// open.
    pub fn submit_form(&mut self, submission: FormSubmission) -> Result<Order> {
        let order = TransitionEngine::new(&mut self.store).apply_form_edit(submission)?;
        self.refresh_after_commit();
        Ok(order)
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or cannot be removed.
    pub fn delete(&mut self, order_id: &str) -> Result<()> {
        TransitionEngine::new(&mut self.store).apply_delete(order_id)?;
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.dragged_order_id == order_id)
        {
            self.session = None;
        }
        self.refresh_after_commit();
        Ok(())
    }

    /// Dispatches a single interaction event.
    ///
    /// # Errors
    ///
    /// Returns the error of the handler the event was routed to.
    pub fn handle(&mut self, event: BoardEvent<A::Event>) -> Result<BoardOutput> {
        match event {
            BoardEvent::DragStart { order_id } => {
                self.drag_start(&order_id)?;
                Ok(BoardOutput::DragStarted { order_id })
            }
            BoardEvent::DragOver { target } => {
                let changed = self.drag_over(&target)?.is_some();
                Ok(BoardOutput::Highlight {
                    column: self.highlighted().map(str::to_string),
                    changed,
                })
            }
            BoardEvent::Drop { target } => {
                let order_id = self
                    .session
                    .as_ref()
                    .map(|session| session.dragged_order_id.clone());
                match self.drop(&target)? {
                    DropOutcome::Moved(order) => Ok(BoardOutput::Moved { order }),
                    DropOutcome::Cancelled => Ok(BoardOutput::Cancelled { order_id }),
                }
            }
            BoardEvent::DragEnd { order_id, column } => Ok(BoardOutput::Moved {
                order: self.drag_end(&order_id, &column)?,
            }),
            BoardEvent::DragCancel => Ok(BoardOutput::Cancelled {
                order_id: self.cancel_drag().map(|session| session.dragged_order_id),
            }),
            BoardEvent::FormSubmit { form } => Ok(BoardOutput::Saved {
                order: self.submit_form(form)?,
            }),
            BoardEvent::DeleteRequest { order_id } => {
                self.delete(&order_id)?;
                Ok(BoardOutput::Deleted { order_id })
            }
        }
    }

    fn refresh(&mut self) -> Result<()> {
        let orders = self.store.list()?;
        self.host.refresh(&orders);
        Ok(())
    }

    /// The store already holds the change; a stale layout is only logged.
    fn refresh_after_commit(&mut self) {
        if let Err(e) = self.refresh() {
            tracing::warn!(code = ?e.code(), error = %e, "board refresh failed after commit");
        }
    }
}
