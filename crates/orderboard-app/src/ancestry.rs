// Rust guideline compliant 2026-10-18

//! Pointer ancestry hosts.
//!
//! Two hosts are provided: [`RecordedPath`] for events that already carry
//! their node path (e.g. captured from a browser and replayed), and
//! [`LayoutTree`] which mirrors the rendered board and derives the path of
//! the node under the pointer by walking parent links.

use orderboard_core::{Column, Error as CoreError, Order, PointerAncestry, Result, UiNode};
use std::collections::HashMap;

/// Host whose events carry the full ancestry path, innermost first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedPath;

impl PointerAncestry for RecordedPath {
    type Event = Vec<UiNode>;

    fn event_path(&self, event: &Self::Event) -> Result<Vec<UiNode>> {
        Ok(event.clone())
    }
}

#[derive(Debug, Clone)]
struct LayoutNode {
    key: String,
    parent: Option<usize>,
    area: Option<String>,
}

/// Mirror of the rendered board.
///
/// Node keys:
/// - `board`: the root
/// - `gutter:N`: untagged space between column `N` and `N + 1`
/// - `column:<Column>`: a column's drop area, tagged with the column name
/// - `header:<Column>`: the column title
/// - `card:<id>` and `card:<id>:text` / `card:<id>:table`: an order card
///
/// An event is the key of the node under the pointer.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    index: HashMap<String, usize>,
}

impl LayoutTree {
    /// Key of the root node.
    pub const ROOT: &'static str = "board";

    /// Builds the layout for the given orders.
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        tree.render(orders);
        tree
    }

    /// Returns the key of a column's drop area.
    pub fn column_key(column: Column) -> String {
        format!("column:{}", column)
    }

    /// Returns the key of an order card.
    pub fn card_key(order_id: &str) -> String {
        format!("card:{}", order_id)
    }

    /// Returns true if a node with this key is rendered.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the number of rendered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn render(&mut self, orders: &[Order]) {
        self.nodes.clear();
        self.index.clear();

        let root = self.push(Self::ROOT.to_string(), None, None);
        let mut columns = HashMap::new();
        for (i, column) in Column::ALL.into_iter().enumerate() {
            if i > 0 {
                self.push(format!("gutter:{}", i - 1), Some(root), None);
            }
            let area = self.push(
                Self::column_key(column),
                Some(root),
                Some(column.as_str().to_string()),
            );
            self.push(format!("header:{}", column), Some(area), None);
            columns.insert(column, area);
        }

        for order in orders {
            let Some(&area) = columns.get(&order.status) else {
                continue;
            };
            let card_key = Self::card_key(&order.id);
            let card = self.push(card_key.clone(), Some(area), None);
            self.push(format!("{}:text", card_key), Some(card), None);
            self.push(format!("{}:table", card_key), Some(card), None);
        }
    }

    fn push(&mut self, key: String, parent: Option<usize>, area: Option<String>) -> usize {
        let idx = self.nodes.len();
        self.index.insert(key.clone(), idx);
        self.nodes.push(LayoutNode { key, parent, area });
        idx
    }
}

impl PointerAncestry for LayoutTree {
    type Event = String;

    fn event_path(&self, event: &Self::Event) -> Result<Vec<UiNode>> {
        let mut cursor = Some(
            *self
                .index
                .get(event)
                .ok_or_else(|| CoreError::UnresolvedTarget(event.clone()))?,
        );

        let mut path = Vec::new();
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            path.push(UiNode {
                label: node.key.clone(),
                area: node.area.clone(),
            });
            cursor = node.parent;
        }
        Ok(path)
    }

    fn refresh(&mut self, orders: &[Order]) {
        self.render(orders);
    }
}
