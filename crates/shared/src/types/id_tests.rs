use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = UserId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
    assert_eq!(ExpenseId::from(uuid).into_inner(), uuid);
}

#[test]
fn test_typed_ids_are_unique() {
    assert_ne!(ExpenseId::new(), ExpenseId::new());
}

#[test]
fn test_typed_id_display_round_trips_through_from_str() {
    let id = ExpenseId::new();
    let parsed = ExpenseId::from_str(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(UserId::from_str("invalid").is_err());
    assert!(ExpenseId::from_str("").is_err());
}

#[test]
fn test_typed_id_serializes_as_bare_uuid() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&UserId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
}

#[test]
fn test_typed_id_converts_back_into_uuid() {
    let uuid = Uuid::new_v4();
    let owner = UserId::from(uuid);
    assert_eq!(Uuid::from(owner), uuid);
    assert_eq!(ExpenseId::from_uuid(uuid).to_string(), uuid.to_string());
}
