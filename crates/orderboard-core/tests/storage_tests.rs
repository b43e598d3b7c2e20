// Rust guideline compliant 2026-10-18

//! Unit tests for the JSONL order store.
//!
//! These tests validate persistence, error conditions and the behaviour of
//! the transition engine on top of a file-backed store.

use orderboard_core::{
    Column, Error, FormSubmission, JsonlStore, Order, OrderDraft, OrderStore, TransitionEngine,
};
use std::fs;
use tempfile::TempDir;

/// Helper to create a test order.
fn create_test_order(id: &str, text: &str) -> Order {
    Order {
        id: id.to_string(),
        text: text.to_string(),
        table: "7".to_string(),
        status: Column::Ordered,
        created_at: 1000,
    }
}

#[test]
fn test_empty_file_handling() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonlStore::new(temp_dir.path().join("orders.jsonl")).expect("Failed to create store");

    let orders = store.load_all().expect("Failed to load orders");
    assert!(orders.is_empty(), "Missing file should return empty vec");
    assert_eq!(store.find_by_id("ord-abc123").unwrap(), None);
}

#[test]
fn test_empty_path_rejected() {
    assert!(JsonlStore::new(Default::default()).is_err());
}

#[test]
fn test_load_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let content = r#"{"id":"ord-123456","text":"Soup","table":"1","status":"Ordered","created_at":1000}
{"id":"ord-234567","text":"Salad","table":"2","status":"Served"}
"#;
    fs::write(&path, content).expect("Failed to write test file");

    let store = JsonlStore::new(path).unwrap();
    let orders = store.load_all().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, "ord-123456");
    assert_eq!(orders[1].status, Column::Served);
    assert_eq!(orders[1].created_at, 0);
}

#[test]
fn test_load_skips_malformed_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let content = r#"{"id":"ord-123456","text":"Soup","table":"1","status":"Ordered"}
{"id":"ord-234567","text":"Salad","table":"2","status":"Kitchen"}
{"id":"ord-345678","text":"Pie","table":

{"id":"ord-456789","text":"Tea","table":"3","status":"Served"}
"#;
    fs::write(&path, content).unwrap();

    let orders = JsonlStore::new(path).unwrap().load_all().unwrap();
    let ids: Vec<&str> = orders.iter().map(|order| order.id.as_str()).collect();
    assert_eq!(ids, vec!["ord-123456", "ord-456789"]);
}

#[test]
fn test_load_rejects_repeated_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let line = r#"{"id":"ord-123456","text":"Soup","table":"1","status":"Ordered"}"#;
    fs::write(&path, format!("{line}\n{line}\n")).unwrap();

    let mut store = JsonlStore::new(path.clone()).unwrap();
    assert!(matches!(store.list(), Err(Error::DuplicateId(id)) if id == "ord-123456"));

    let result = TransitionEngine::new(&mut store).apply_drop("ord-123456", "Ready");
    assert!(matches!(result, Err(Error::DuplicateId(_))));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{line}\n{line}\n"),
        "a rejected load must not rewrite the file"
    );
}

#[test]
fn test_load_rejects_invalid_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let content = concat!(
        r#"{"id":"ord-123456","text":"","table":"1","status":"Ordered"}"#,
        "\n",
        r#"{"id":"ord-abcdef","text":"Tea","table":"2","status":"Ordered"}"#,
        "\n",
    );
    fs::write(&path, content).unwrap();

    let mut store = JsonlStore::new(path.clone()).unwrap();
    assert!(matches!(store.load_all(), Err(Error::Validation(_))));

    // A write through the store must not drop the unreadable record.
    let result = TransitionEngine::new(&mut store).apply_drop("ord-abcdef", "Served");
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_save_all_round_trip_and_one_record_per_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let store = JsonlStore::new(path.clone()).unwrap();

    let orders = vec![
        create_test_order("ord-111111", "Soup"),
        create_test_order("ord-222222", "Bread"),
    ];
    store.save_all(&orders).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    assert_eq!(store.load_all().unwrap(), orders);
    assert!(!path.with_extension("jsonl.tmp").exists());
}

#[test]
fn test_create_update_delete() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = JsonlStore::new(temp_dir.path().join("orders.jsonl")).unwrap();

    let id = store.create(OrderDraft::new("Soup", "1")).unwrap();
    let mut order = store.find_by_id(&id).unwrap().expect("order stored");
    assert_eq!(order.status, Column::Ordered);

    order.status = Column::Ready;
    store.update(&order).unwrap();
    assert_eq!(store.find_by_id(&id).unwrap(), Some(order));

    store.delete(&id).unwrap();
    assert_eq!(store.find_by_id(&id).unwrap(), None);
    assert!(matches!(store.delete(&id), Err(Error::OrderNotFound(_))));
}

#[test]
fn test_update_unknown_order_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let mut store = JsonlStore::new(path.clone()).unwrap();
    store.save_all(&[create_test_order("ord-111111", "Soup")]).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let ghost = create_test_order("ord-999999", "Ghost");
    assert!(matches!(store.update(&ghost), Err(Error::OrderNotFound(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_locked_mutations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let mut store = JsonlStore::new(path.clone()).unwrap().with_locking(true);

    let first = store.create(OrderDraft::new("Soup", "1")).unwrap();
    let second = store.create(OrderDraft::new("Soup", "1")).unwrap();
    assert_ne!(first, second);
    assert_eq!(store.list().unwrap().len(), 2);
    assert!(path.with_extension("lock").exists());
}

#[test]
fn test_engine_over_jsonl_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let mut store = JsonlStore::new(path.clone()).unwrap();

    let order = TransitionEngine::new(&mut store)
        .apply_form_edit(FormSubmission::create("2x Soup", "5"))
        .unwrap();
    TransitionEngine::new(&mut store)
        .apply_drop(&order.id, "Ready")
        .unwrap();

    let reopened = JsonlStore::new(path).unwrap();
    let stored = reopened.find_by_id(&order.id).unwrap().unwrap();
    assert_eq!(stored.status, Column::Ready);
    assert_eq!(stored.text, "2x Soup");
}
