use uuid::Uuid;

/// Resolve the conversation id for a chat request.
///
/// A non-empty client-supplied id is returned unchanged. Ids are opaque and
/// trusted: no format or ownership check is made. Otherwise a fresh random
/// v4 UUID starts a new conversation.
pub fn resolve_conversation_id(supplied: Option<&str>) -> String {
    match supplied {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}
