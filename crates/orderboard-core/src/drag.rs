// Rust guideline compliant 2026-10-18

//! Drag resolution for board gestures.
//!
//! While a card is dragged the host reports, for every pointer-over event,
//! the ancestry of the node under the pointer ordered from the innermost node
//! to the document root. The first node carrying a drop-area tag names the
//! column the pointer is over. How the ancestry is obtained is host specific
//! and hidden behind [`PointerAncestry`].

use crate::{Order, Result};
use serde::{Deserialize, Serialize};

/// A rendered node on a pointer ancestry path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiNode {
    /// Human-readable node label, e.g. `card:ord-abc123`.
    #[serde(default)]
    pub label: String,
    /// Drop-area tag declared by this node, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl UiNode {
    /// Creates a node without a drop-area tag.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            area: None,
        }
    }

    /// Creates a node tagged as the drop area for `area`.
    pub fn area(label: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            area: Some(area.into()),
        }
    }
}

/// Host capability yielding the pointer ancestry of an event.
///
/// Each host environment provides one implementation, chosen when the board
/// is constructed.
pub trait PointerAncestry {
    /// Event payload the host raises for pointer movement and drops.
    type Event;

    /// Returns the ancestry of the event target, innermost node first.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot resolve the event target.
    fn event_path(&self, event: &Self::Event) -> Result<Vec<UiNode>>;

    /// Called after every committed change so the host can re-render.
    fn refresh(&mut self, _orders: &[Order]) {}
}

/// Resolves the column an event path points at.
///
/// Scans `path` from the innermost node outwards and returns the tag of the
/// first node declaring a drop area, or `None` when no node declares one.
/// An empty tag does not count as a declaration.
pub fn resolve_column(path: &[UiNode]) -> Option<&str> {
    path.iter()
        .filter_map(|node| node.area.as_deref())
        .find(|tag| !tag.is_empty())
}

/// State of a single drag gesture.
///
/// Exists from drag start until the card is dropped or the gesture is
/// cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DragSession {
    /// ID of the order being dragged.
    pub dragged_order_id: String,
    /// Column tag currently under the pointer.
    pub current_column: Option<String>,
}

impl DragSession {
    /// Starts a session for the given order with no column highlighted.
    pub fn start(order_id: impl Into<String>) -> Self {
        Self {
            dragged_order_id: order_id.into(),
            current_column: None,
        }
    }
}

/// Records the column the pointer is over.
///
/// Repeating the same column yields an identical session.
#[must_use]
pub fn update_dragging_state(session: DragSession, over: &str) -> DragSession {
    DragSession {
        current_column: Some(over.to_string()),
        ..session
    }
}
