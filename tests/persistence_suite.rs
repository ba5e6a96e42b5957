mod common;

use std::fs;

use chrono::NaiveDate;
use ledger_core::{
    core::LedgerStore,
    errors::LedgerError,
    ledger::{Summary, Transaction, TransactionKind},
    storage::{JsonSnapshotStorage, SnapshotBackend},
};
use rust_decimal::Decimal;

fn backfilled(units: i64, kind: TransactionKind, category: &str, day: u32) -> Transaction {
    let at = NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    Transaction::new(Decimal::from(units), category, kind, "Backfill", Some(at)).unwrap()
}

#[test]
fn missing_store_loads_as_empty_ledger() {
    let (store, path) = common::setup_json_store();
    assert!(!path.exists());
    assert!(store.all().is_empty());
    assert_eq!(store.summary(), Summary::default());
}

#[test]
fn reload_after_appends_returns_same_sequence() {
    let (mut store, path) = common::setup_json_store();
    let appended = vec![
        backfilled(100, TransactionKind::Income, "salary", 3),
        backfilled(40, TransactionKind::Expense, "groceries", 1),
        Transaction::new(
            Decimal::new(1505, 2),
            "groceries",
            TransactionKind::Expense,
            "Corner Shop",
            None,
        )
        .unwrap(),
    ];
    for txn in appended.clone() {
        store.append(txn).expect("append");
    }

    let reopened = LedgerStore::open_json(&path).expect("reopen");
    assert_eq!(reopened.all(), appended.as_slice());
    assert_eq!(reopened.all()[1].created_at_label(), "2024-05-01 10:30:00");
    assert_eq!(reopened.balance(), Decimal::new(4495, 2));
}

#[test]
fn snapshot_holds_expected_shape() {
    let (mut store, path) = common::setup_json_store();
    store
        .append(backfilled(12, TransactionKind::Expense, "books", 9))
        .expect("append");
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let record = &raw["transactions"][0];
    assert_eq!(record["kind"], "expense");
    assert_eq!(record["category"], "Books");
    assert_eq!(record["description"], "backfill");
    assert_eq!(record["created_at"], "2024-05-09 10:30:00");
    assert!(raw.get("total").is_none(), "balance must never be stored");
}

#[test]
fn record_without_amount_is_corrupt_not_zero() {
    let dir = common::temp_dir();
    let path = dir.join("ledger.json");
    fs::write(
        &path,
        r#"{"transactions":[{"kind":"income","category":"Salary","description":"","created_at":"2024-01-01 09:00:00"}]}"#,
    )
    .unwrap();
    let err = LedgerStore::open_json(&path).err().expect("load must fail");
    assert!(matches!(err, LedgerError::StoreCorrupt { .. }), "unexpected: {err:?}");
}

#[test]
fn wrong_field_types_are_corrupt() {
    let dir = common::temp_dir();
    let path = dir.join("ledger.json");
    fs::write(
        &path,
        r#"{"transactions":[{"amount":"12","kind":1,"category":"Salary","description":"","created_at":"2024-01-01"}]}"#,
    )
    .unwrap();
    let err = JsonSnapshotStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::StoreCorrupt { .. }));
}

#[test]
fn failed_save_preserves_original_file() {
    let (mut store, path) = common::setup_json_store();
    store
        .append(backfilled(42, TransactionKind::Income, "gift", 2))
        .expect("initial append");
    let original = fs::read_to_string(&path).expect("read original file");

    // A directory squatting on the staging name makes File::create fail.
    let staging = path.with_extension("json.tmp");
    fs::create_dir_all(&staging).unwrap();

    let err = store
        .append(backfilled(99, TransactionKind::Expense, "rent", 4))
        .expect_err("save must fail while staging path is a directory");
    assert!(matches!(err, LedgerError::Persist { .. }));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert_eq!(store.all().len(), 1, "failed append must not linger in memory");

    fs::remove_dir_all(&staging).unwrap();
    store
        .append(backfilled(99, TransactionKind::Expense, "rent", 4))
        .expect("append succeeds once the path is free");
    assert_eq!(LedgerStore::open_json(&path).unwrap().all().len(), 2);
}

#[test]
fn negative_amount_never_reaches_the_store() {
    let (store, path) = common::setup_json_store();
    let err = Transaction::expense(Decimal::from(-5), "misc", "").unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
    assert!(store.all().is_empty());
    assert!(!path.exists());
}

#[test]
fn unreadable_store_fails_instead_of_loading_empty() {
    let dir = common::temp_dir();
    let path = dir.join("ledger.json");
    // Present but unreadable as a file: only a missing store may load as empty.
    fs::create_dir_all(&path).unwrap();
    let err = LedgerStore::open_json(&path).err().expect("load must fail");
    assert!(matches!(err, LedgerError::StoreCorrupt { .. }), "unexpected: {err:?}");
}
