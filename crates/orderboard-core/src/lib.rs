// Rust guideline compliant 2026-10-18

//! Orderboard Core Library
//!
//! This crate provides the foundational components for the Orderboard
//! restaurant order board:
//! - Data models (Order, Column, OrderDraft)
//! - Drag resolution (pointer ancestry paths, drag sessions)
//! - Transition engine (drop, form edit, delete)
//! - Order store trait with in-memory and JSONL implementations
//! - Hash ID generation
//! - Configuration and error types

pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod storage;
pub mod store;

pub use config::{Config, OutputFormat};
pub use drag::{resolve_column, update_dragging_state, DragSession, PointerAncestry, UiNode};
pub use engine::{FormMode, FormSubmission, TransitionEngine};
pub use error::{Error, Result};
pub use models::{Column, Order, OrderDraft};
pub use storage::JsonlStore;
pub use store::{MemoryStore, OrderStore};
