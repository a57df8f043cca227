use std::sync::Arc;

use crate::core::services::{AuthService, ServiceError};
use crate::core::store::Store;
use crate::ledger::{Permission, UserRole};
use crate::storage::MemoryStorage;

fn store() -> (Store, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (Store::with_storage(Arc::clone(&storage)), storage)
}

#[test]
fn login_loads_and_trims_username() {
    let (mut store, _) = store();
    let user = AuthService::login(&mut store, "  Admin ", "admin123").expect("default admin");
    assert!(store.is_loaded());
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn login_rejects_blank_and_wrong_credentials() {
    let (mut store, _) = store();
    assert!(AuthService::login(&mut store, "", "admin123").is_none());
    assert!(AuthService::login(&mut store, "admin", "   ").is_none());
    assert!(AuthService::login(&mut store, "admin", "admin1234").is_none());
}

#[test]
fn register_validates_lengths() {
    let (mut store, storage) = store();
    let short_name = AuthService::register(&mut store, " ab ", "secret").expect_err("short name");
    assert!(matches!(short_name, ServiceError::Invalid(ref msg) if msg.contains("Username")));
    let short_pw = AuthService::register(&mut store, "bob", "abc").expect_err("short password");
    assert!(matches!(short_pw, ServiceError::Invalid(ref msg) if msg.contains("Password")));
    assert_eq!(store.users().len(), 2);
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn register_creates_plain_user_and_rejects_duplicates() {
    let (mut store, storage) = store();
    let created = AuthService::register(&mut store, "dana", "pass").unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.role, UserRole::User);
    assert_eq!(storage.save_count(), 1);

    let dup = AuthService::register(&mut store, "DANA", "other").expect_err("duplicate");
    assert!(matches!(dup, ServiceError::Invalid(ref msg) if msg.contains("already exists")));
    assert_eq!(store.users().len(), 3);

    assert!(AuthService::login(&mut store, "dana", "pass").is_some());
}

#[test]
fn authorize_follows_role() {
    let (mut store, _) = store();
    let admin = AuthService::login(&mut store, "admin", "admin123").unwrap();
    let user = AuthService::login(&mut store, "user", "user123").unwrap();
    assert!(AuthService::authorize(&admin, Permission::ManageLimits).is_ok());
    let denied = AuthService::authorize(&user, Permission::EditTransactions).expect_err("read-only");
    assert!(matches!(denied, ServiceError::Forbidden(_)));
}
