use chatrelay_core::conversation::resolve_conversation_id;
use uuid::Uuid;

#[test]
fn supplied_id_is_returned_unchanged() {
    assert_eq!(resolve_conversation_id(Some("abc-123")), "abc-123");
}

#[test]
fn supplied_id_is_not_validated() {
    let odd = "not a uuid / with spaces";
    assert_eq!(resolve_conversation_id(Some(odd)), odd);
}

#[test]
fn missing_id_generates_uuid() {
    let id = resolve_conversation_id(None);
    assert!(Uuid::parse_str(&id).is_ok(), "expected a UUID, got {id}");
}

#[test]
fn empty_id_generates_uuid() {
    let id = resolve_conversation_id(Some(""));
    assert!(Uuid::parse_str(&id).is_ok(), "expected a UUID, got {id}");
}

#[test]
fn generated_ids_are_unique() {
    let a = resolve_conversation_id(None);
    let b = resolve_conversation_id(None);
    assert_ne!(a, b);
}
