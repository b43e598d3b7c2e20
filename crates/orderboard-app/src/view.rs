// Rust guideline compliant 2026-10-18

//! Column grouping for rendering the board.

use orderboard_core::{Column, Order};
use serde::Serialize;

/// Orders of one column, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// The column.
    pub column: Column,
    /// Cards shown in the column, oldest first.
    pub orders: Vec<Order>,
}

/// All columns of the board in `Column::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// One entry per column.
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Groups orders into their columns.
    ///
    /// Each column is sorted by creation time, then ID.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let mut columns: Vec<ColumnView> = Column::ALL
            .into_iter()
            .map(|column| ColumnView {
                column,
                orders: Vec::new(),
            })
            .collect();

        for order in orders {
            if let Some(view) = columns.iter_mut().find(|view| view.column == order.status) {
                view.orders.push(order);
            }
        }

        for view in &mut columns {
            view.orders
                .sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        }

        Self { columns }
    }

    /// Returns the orders of a single column.
    pub fn column(&self, column: Column) -> &[Order] {
        self.columns
            .iter()
            .find(|view| view.column == column)
            .map(|view| view.orders.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the total number of orders on the board.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|view| view.orders.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(id: &str, status: Column, created_at: i64) -> Order {
        Order {
            id: id.to_string(),
            text: "Soup".to_string(),
            table: "1".to_string(),
            status,
            created_at,
        }
    }

    #[test]
    fn test_orders_grouped_and_sorted() {
        let view = BoardView::from_orders(vec![
            sample_order("ord-cccccc", Column::Ready, 30),
            sample_order("ord-aaaaaa", Column::Ordered, 20),
            sample_order("ord-bbbbbb", Column::Ready, 10),
        ]);

        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.column(Column::Ordered).len(), 1);
        let ready: Vec<&str> = view
            .column(Column::Ready)
            .iter()
            .map(|order| order.id.as_str())
            .collect();
        assert_eq!(ready, vec!["ord-bbbbbb", "ord-cccccc"]);
        assert!(view.column(Column::Served).is_empty());
        assert_eq!(view.total(), 3);
    }
}
