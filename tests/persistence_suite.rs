mod common;

use std::{fs, path::Path};

use budget_ledger::{
    ledger::{
        BudgetData, BudgetLimit, BudgetPeriod, Category, Transaction, TransactionType, User,
        UserRole,
    },
    storage::JsonStorage,
    LedgerError, LoadStatus, Store,
};
use chrono::{NaiveDate, NaiveDateTime};
use common::{setup_store, temp_dir};
use rust_decimal::Decimal;
use serde_json::Value;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_file_keeps_defaults_without_writing() {
    let (mut store, path) = setup_store();
    assert_eq!(store.ensure_loaded(), LoadStatus::Missing);
    assert!(!path.exists());
    assert_eq!(store.users(), User::defaults().as_slice());
    assert_eq!(store.categories(), Category::defaults().as_slice());
}

#[test]
fn state_survives_reopen() {
    let (mut store, path) = setup_store();
    store.ensure_loaded();
    store
        .add_transaction(
            Transaction::expense(Decimal::new(1250, 1), "Groceries", at(2024, 3, 2))
                .with_description("weekly shop"),
        )
        .unwrap();
    store
        .add_transaction(Transaction::income(Decimal::from(2000), "Salary", at(2024, 3, 1)))
        .unwrap();
    store
        .add_category(Category::new("Pets", TransactionType::Expense).with_color("#AA00AA"))
        .unwrap();
    store
        .add_budget_limit(BudgetLimit::new(
            "Groceries",
            TransactionType::Expense,
            BudgetPeriod::Week,
            Decimal::from(80),
        ))
        .unwrap();
    store
        .add_user(User::new("erin", "pw-erin", UserRole::User))
        .unwrap();
    let expected = store.data().clone();
    store.close().unwrap();

    let mut reopened = Store::with_storage(JsonStorage::new(&path));
    assert!(matches!(
        reopened.ensure_loaded(),
        LoadStatus::Loaded { repairs } if !repairs.changed()
    ));
    assert_eq!(reopened.data(), &expected);
}

#[test]
fn document_uses_snake_case_and_type_keys() {
    let (mut store, path) = setup_store();
    store.ensure_loaded();
    store
        .add_transaction(Transaction::expense(Decimal::new(45, 1), "Transport", at(2024, 1, 8)))
        .unwrap();
    store
        .add_budget_limit(BudgetLimit::new(
            "Transport",
            TransactionType::Expense,
            BudgetPeriod::Month,
            Decimal::from(30),
        ))
        .unwrap();

    let doc = read_json(&path);
    for key in ["transactions", "categories", "budget_limits", "users"] {
        assert!(doc.get(key).is_some(), "missing `{key}`");
    }
    let txn = &doc["transactions"][0];
    assert_eq!(txn["type"], "Expense");
    assert_eq!(txn["amount"].as_f64(), Some(4.5));
    assert_eq!(txn["id"], 1);
    let limit = &doc["budget_limits"][0];
    assert_eq!(limit["category_name"], "Transport");
    assert_eq!(limit["period"], "Month");
}

#[test]
fn empty_users_are_reseeded_and_written_back() {
    let path = temp_dir().join("data.json");
    fs::write(
        &path,
        r##"{"transactions":[],"categories":[{"name":"Rent","type":"Expense","color":"#111111"}],"budget_limits":[],"users":[]}"##,
    )
    .unwrap();

    let mut store = Store::with_storage(JsonStorage::new(&path));
    let status = store.ensure_loaded();
    assert!(matches!(
        status,
        LoadStatus::Loaded { repairs } if repairs.seeded_users && !repairs.seeded_categories
    ));

    let users = store.users();
    assert_eq!(users.len(), 2);
    assert_eq!(
        (users[0].username.as_str(), users[0].role),
        ("admin", UserRole::Admin)
    );
    assert_eq!(
        (users[1].username.as_str(), users[1].role),
        ("user", UserRole::User)
    );
    assert_eq!(store.categories().len(), 1);

    let doc = read_json(&path);
    assert_eq!(doc["users"].as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_and_null_collections_are_backfilled() {
    let path = temp_dir().join("data.json");
    fs::write(
        &path,
        r#"{"transactions":null,"users":[{"id":7,"username":"solo","password":"pw12","role":"User"}]}"#,
    )
    .unwrap();

    let mut store = Store::with_storage(JsonStorage::new(&path));
    let status = store.ensure_loaded();
    assert!(matches!(
        status,
        LoadStatus::Loaded { repairs } if repairs.seeded_categories && !repairs.seeded_users
    ));
    assert!(store.transactions().is_empty());
    assert!(store.budget_limits().is_empty());
    assert_eq!(store.categories(), Category::defaults().as_slice());
    assert_eq!(store.users()[0].id, 7);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let path = temp_dir().join("data.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = Store::with_storage(JsonStorage::new(&path));
    let status = store.ensure_loaded();
    assert!(status.is_fallback());
    assert!(matches!(status, LoadStatus::Failed { .. }));
    assert_eq!(store.users().len(), 2);
    assert_eq!(store.categories().len(), Category::defaults().len());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

    // The next mutation replaces the unreadable document.
    store
        .add_transaction(Transaction::income(Decimal::from(5), "Gifts", at(2024, 2, 2)))
        .unwrap();
    let reloaded: BudgetData =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded.transactions.len(), 1);
}

#[test]
fn write_failure_is_reported_and_previous_file_kept() {
    let (mut store, path) = setup_store();
    store.ensure_loaded();
    store
        .add_transaction(Transaction::expense(Decimal::from(9), "Health", at(2024, 4, 1)))
        .unwrap();
    let previous = fs::read_to_string(&path).unwrap();

    // A directory in place of the staging file makes the write fail.
    let tmp = path.with_extension("json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    let err = store
        .add_transaction(Transaction::expense(Decimal::from(3), "Health", at(2024, 4, 2)))
        .expect_err("staging write must fail");
    assert!(matches!(err, LedgerError::Io(_) | LedgerError::Persistence(_)));
    assert_eq!(store.transactions().len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), previous);

    fs::remove_dir_all(&tmp).unwrap();
    store.flush().unwrap();
    let doc = read_json(&path);
    assert_eq!(doc["transactions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_parent_directories_are_created() {
    let path = temp_dir().join("nested").join("deeper").join("data.json");
    let mut store = Store::with_storage(JsonStorage::new(&path));
    store.ensure_loaded();
    store.flush().unwrap();
    assert!(path.is_file());
}

#[test]
fn stored_max_id_blocks_auto_assignment() {
    let path = temp_dir().join("data.json");
    fs::write(
        &path,
        r#"{"transactions":[{"id":4294967295,"amount":12.5,"description":"","category":"Gifts","date":"2024-01-01T09:00:00","type":"Income"}]}"#,
    )
    .unwrap();
    let mut store = Store::with_storage(JsonStorage::new(&path));
    store.ensure_loaded();

    let err = store
        .add_transaction(Transaction::income(Decimal::from(1), "Gifts", at(2024, 1, 2)))
        .expect_err("id space exhausted");
    assert!(matches!(err, LedgerError::InvalidInput(_)));
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.transactions()[0].id, u32::MAX);
}
