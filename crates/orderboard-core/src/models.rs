// Rust guideline compliant 2026-10-18

//! Core data models for Orderboard.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A status column on the board.
///
/// The set is fixed; every order sits in exactly one column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Column {
    /// Order has been taken and sent to the kitchen.
    #[default]
    Ordered,
    /// Order is ready to be carried to the table.
    Ready,
    /// Order has been served.
    Served,
}

impl Column {
    /// All columns in board order, left to right.
    pub const ALL: [Column; 3] = [Column::Ordered, Column::Ready, Column::Served];

    /// The column a new order starts in.
    pub const INITIAL: Column = Column::Ordered;

    /// Returns the column name as it appears on the board and in drop-area tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::Ready => "Ready",
            Column::Served => "Served",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = Error;

    /// Parses a column tag, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` carrying the original tag if it names
    /// no column.
    fn from_str(tag: &str) -> Result<Self> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(tag.trim()))
            .ok_or_else(|| Error::InvalidColumn(tag.to_string()))
    }
}

/// A single restaurant order shown as a card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique hash-based identifier (format: ord-XXXXXX).
    pub id: String,
    /// Free-form description of what was ordered.
    pub text: String,
    /// Table identifier the order belongs to.
    pub table: String,
    /// Column the order currently sits in.
    pub status: Column,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

/// The fields supplied when creating an order; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Order description.
    pub text: String,
    /// Table identifier.
    pub table: String,
    /// Starting column, `Column::INITIAL` when absent.
    #[serde(default)]
    pub status: Option<Column>,
}

impl OrderDraft {
    /// Creates a draft that starts in the initial column.
    pub fn new(text: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            table: table.into(),
            status: None,
        }
    }

    /// Overrides the starting column.
    #[must_use]
    pub fn with_status(mut self, status: Column) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the stored record from this draft.
    ///
    /// Text and table are trimmed.
    pub fn into_order(self, id: String, created_at: i64) -> Order {
        Order {
            id,
            text: self.text.trim().to_string(),
            table: self.table.trim().to_string(),
            status: self.status.unwrap_or(Column::INITIAL),
            created_at,
        }
    }
}

impl Order {
    /// Validates the order data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Text is empty after trimming
    /// - Table is empty after trimming
    /// - ID format is invalid
    pub fn validate(&self) -> Result<()> {
        require_field("text", &self.text)?;
        require_field("table", &self.table)?;
        crate::identity::validate_id_format(&self.id)
    }
}

/// Fails with `Error::Validation` when `value` is blank.
pub(crate) fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} cannot be empty", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_parse_is_case_insensitive() {
        assert_eq!("ready".parse::<Column>().unwrap(), Column::Ready);
        assert_eq!(" SERVED ".parse::<Column>().unwrap(), Column::Served);
        assert_eq!("Ordered".parse::<Column>().unwrap(), Column::Ordered);
    }

    #[test]
    fn test_column_parse_rejects_unknown_tag() {
        match "Kitchen".parse::<Column>() {
            Err(Error::InvalidColumn(tag)) => assert_eq!(tag, "Kitchen"),
            other => panic!("expected InvalidColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_column_serializes_by_name() {
        let json = serde_json::to_string(&Column::Ready).unwrap();
        assert_eq!(json, "\"Ready\"");
    }

    #[test]
    fn test_draft_defaults_to_initial_column() {
        let order = OrderDraft::new(" 2x Soup ", "5").into_order("ord-abc123".to_string(), 10);
        assert_eq!(order.status, Column::Ordered);
        assert_eq!(order.text, "2x Soup");
        assert_eq!(order.created_at, 10);
    }

    #[test]
    fn test_validate_rejects_blank_table() {
        let order = OrderDraft::new("Soup", "   ").into_order("ord-abc123".to_string(), 0);
        assert!(matches!(order.validate(), Err(Error::Validation(_))));
    }
}
