use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = UserId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = AccountId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_roundtrip_str() {
    let id = CategoryId::new();
    let parsed = CategoryId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_typed_id_ordering_is_time_based() {
    // UUID v7 encodes a timestamp prefix, so later IDs compare higher.
    let a = TransactionId::new();
    let b = TransactionId::new();
    assert!(a.into_inner() <= b.into_inner());
}

#[test]
fn test_distinct_ids_are_unique() {
    let a = BudgetId::new();
    let b = BudgetId::new();
    assert_ne!(a, b);
}
