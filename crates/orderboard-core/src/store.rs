// Rust guideline compliant 2026-10-18

//! The order store abstraction and its in-memory implementation.

use crate::identity::generate_unique_id;
use crate::{Error, Order, OrderDraft, Result};

/// Authoritative collection of orders keyed by ID.
///
/// The transition engine only relies on these operations; a store owns the
/// assignment of IDs and creation timestamps.
pub trait OrderStore {
    /// Stores a new order built from `draft` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting order is invalid or cannot be
    /// persisted.
    fn create(&mut self, draft: OrderDraft) -> Result<String>;

    /// Looks up an order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backing storage cannot be read; a missing
    /// order is `Ok(None)`.
    fn find_by_id(&self, id: &str) -> Result<Option<Order>>;

    /// Replaces the stored record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::OrderNotFound` if no order has that ID.
    fn update(&mut self, order: &Order) -> Result<()>;

    /// Removes an order.
    ///
    /// # Errors
    ///
    /// Returns `Error::OrderNotFound` if no order has that ID.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Returns every order in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn list(&self) -> Result<Vec<Order>>;
}

/// Current Unix timestamp in seconds.
pub(crate) fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// In-memory order store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    orders: Vec<Order>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `orders`.
    ///
    /// # Errors
    ///
    /// Returns an error if any order is invalid or two orders share an ID.
    pub fn with_orders(orders: Vec<Order>) -> Result<Self> {
        let mut store = Self::new();
        for order in orders {
            order.validate()?;
            if store.position(&order.id).is_some() {
                return Err(Error::DuplicateId(order.id));
            }
            store.orders.push(order);
        }
        Ok(store)
    }

    /// Returns the number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the store holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }
}

impl OrderStore for MemoryStore {
    fn create(&mut self, draft: OrderDraft) -> Result<String> {
        let created_at = now();
        let id = generate_unique_id(&draft.text, &draft.table, created_at, |candidate| {
            self.position(candidate).is_some()
        });
        let order = draft.into_order(id.clone(), created_at);
        order.validate()?;
        self.orders.push(order);
        Ok(id)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.position(id).map(|pos| self.orders[pos].clone()))
    }

    fn update(&mut self, order: &Order) -> Result<()> {
        order.validate()?;
        let pos = self
            .position(&order.id)
            .ok_or_else(|| Error::OrderNotFound(order.id.clone()))?;
        self.orders[pos] = order.clone();
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| Error::OrderNotFound(id.to_string()))?;
        self.orders.remove(pos);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
