// Rust guideline compliant 2026-10-18

//! Unit tests for the transition engine.
//!
//! These tests validate drops, form edits and deletions against an
//! in-memory store, including the error paths that must leave the store
//! untouched.

use orderboard_core::{
    Column, Error, FormSubmission, MemoryStore, OrderDraft, OrderStore, TransitionEngine,
};

/// Helper to create a store holding a single order.
fn store_with_order(text: &str, table: &str) -> (MemoryStore, String) {
    let mut store = MemoryStore::new();
    let id = store
        .create(OrderDraft::new(text, table))
        .expect("Failed to create order");
    (store, id)
}

#[test]
fn test_drop_updates_only_status() {
    let (mut store, id) = store_with_order("2x Soup", "5");
    let before = store.find_by_id(&id).unwrap().unwrap();

    let moved = TransitionEngine::new(&mut store)
        .apply_drop(&id, "Ready")
        .expect("Drop should succeed");

    assert_eq!(moved.status, Column::Ready);
    assert_eq!(moved.id, before.id);
    assert_eq!(moved.text, before.text);
    assert_eq!(moved.table, before.table);
    assert_eq!(moved.created_at, before.created_at);
    assert_eq!(store.find_by_id(&id).unwrap(), Some(moved));
}

#[test]
fn test_drop_twice_is_idempotent() {
    let (mut store, id) = store_with_order("Steak", "2");
    let mut engine = TransitionEngine::new(&mut store);

    let first = engine.apply_drop(&id, "Served").unwrap();
    let second = engine.apply_drop(&id, "Served").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_drop_accepts_case_insensitive_tag() {
    let (mut store, id) = store_with_order("Steak", "2");
    let moved = TransitionEngine::new(&mut store)
        .apply_drop(&id, "served")
        .unwrap();
    assert_eq!(moved.status, Column::Served);
}

#[test]
fn test_drop_unknown_order() {
    let (mut store, _id) = store_with_order("Steak", "2");
    let snapshot = store.list().unwrap();

    let result = TransitionEngine::new(&mut store).apply_drop("ord-ffffff", "Ready");
    assert!(matches!(result, Err(Error::OrderNotFound(id)) if id == "ord-ffffff"));
    assert_eq!(store.list().unwrap(), snapshot);
}

#[test]
fn test_drop_invalid_column() {
    let (mut store, id) = store_with_order("Steak", "2");
    let snapshot = store.list().unwrap();

    let result = TransitionEngine::new(&mut store).apply_drop(&id, "Kitchen");
    assert!(matches!(result, Err(Error::InvalidColumn(tag)) if tag == "Kitchen"));
    assert_eq!(store.list().unwrap(), snapshot);
}

#[test]
fn test_any_column_reachable_from_any_column() {
    let (mut store, id) = store_with_order("Tea", "9");
    let mut engine = TransitionEngine::new(&mut store);

    for from in Column::ALL {
        for to in Column::ALL {
            engine.apply_drop(&id, from.as_str()).unwrap();
            let moved = engine.apply_drop(&id, to.as_str()).unwrap();
            assert_eq!(moved.status, to, "{} -> {} should be allowed", from, to);
        }
    }
}

#[test]
fn test_create_defaults_to_ordered() {
    let mut store = MemoryStore::new();
    let order = TransitionEngine::new(&mut store)
        .apply_form_edit(FormSubmission::create("  2x Soup ", " 5 "))
        .unwrap();

    assert_eq!(order.status, Column::Ordered);
    assert_eq!(order.text, "2x Soup");
    assert_eq!(order.table, "5");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_with_explicit_status() {
    let mut store = MemoryStore::new();
    let mut submission = FormSubmission::create("Cake", "3");
    submission.status = Some("Ready".to_string());

    let order = TransitionEngine::new(&mut store)
        .apply_form_edit(submission)
        .unwrap();
    assert_eq!(order.status, Column::Ready);
}

#[test]
fn test_create_with_invalid_status_leaves_store_empty() {
    let mut store = MemoryStore::new();
    let mut submission = FormSubmission::create("Cake", "3");
    submission.status = Some("Eaten".to_string());

    let result = TransitionEngine::new(&mut store).apply_form_edit(submission);
    assert!(matches!(result, Err(Error::InvalidColumn(_))));
    assert!(store.is_empty());
}

#[test]
fn test_form_missing_fields() {
    let (mut store, id) = store_with_order("Steak", "2");
    let snapshot = store.list().unwrap();
    let mut engine = TransitionEngine::new(&mut store);

    for submission in [
        FormSubmission::create("", "5"),
        FormSubmission::create("Soup", ""),
        FormSubmission::create("   ", "5"),
        FormSubmission::edit(id.as_str(), "Steak", "  ", "Ready"),
        FormSubmission::edit(id.as_str(), "", "2", "Ready"),
    ] {
        let result = engine.apply_form_edit(submission);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    assert_eq!(store.list().unwrap(), snapshot);
}

#[test]
fn test_edit_replaces_whole_record() {
    let (mut store, id) = store_with_order("Steak", "2");
    let before = store.find_by_id(&id).unwrap().unwrap();

    let edited = TransitionEngine::new(&mut store)
        .apply_form_edit(FormSubmission::edit(id.as_str(), "Steak, rare", "4", "Served"))
        .unwrap();

    assert_eq!(edited.id, id);
    assert_eq!(edited.text, "Steak, rare");
    assert_eq!(edited.table, "4");
    assert_eq!(edited.status, Column::Served);
    assert_eq!(edited.created_at, before.created_at);
    assert_eq!(store.find_by_id(&id).unwrap(), Some(edited));
}

#[test]
fn test_edit_without_status_is_rejected() {
    let (mut store, id) = store_with_order("Steak", "2");
    let mut submission = FormSubmission::edit(id.as_str(), "Steak", "2", "Ready");
    submission.status = None;

    let result = TransitionEngine::new(&mut store).apply_form_edit(submission);
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(
        store.find_by_id(&id).unwrap().unwrap().status,
        Column::Ordered
    );
}

#[test]
fn test_edit_unknown_order() {
    let mut store = MemoryStore::new();
    let result = TransitionEngine::new(&mut store)
        .apply_form_edit(FormSubmission::edit("ord-123abc", "Tea", "1", "Ready"));
    assert!(matches!(result, Err(Error::OrderNotFound(_))));
    assert!(store.is_empty());
}

#[test]
fn test_delete_then_find_returns_none() {
    let (mut store, id) = store_with_order("Steak", "2");
    TransitionEngine::new(&mut store).apply_delete(&id).unwrap();
    assert_eq!(store.find_by_id(&id).unwrap(), None);
}

#[test]
fn test_delete_unknown_order() {
    let (mut store, _id) = store_with_order("Steak", "2");
    let result = TransitionEngine::new(&mut store).apply_delete("ord-000000");
    assert!(matches!(result, Err(Error::OrderNotFound(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_order_lifecycle_end_to_end() {
    let mut store = MemoryStore::new();
    let mut engine = TransitionEngine::new(&mut store);

    let created = engine
        .apply_form_edit(FormSubmission::create("2x Soup", "5"))
        .unwrap();
    assert_eq!(created.status, Column::Ordered);

    engine.apply_drop(&created.id, "Ready").unwrap();
    assert_eq!(
        store.find_by_id(&created.id).unwrap().unwrap().status,
        Column::Ready
    );

    TransitionEngine::new(&mut store)
        .apply_delete(&created.id)
        .unwrap();
    assert_eq!(store.find_by_id(&created.id).unwrap(), None);
}
