use serde::Serialize;

/// A conversation summary as shown in the message-group sidebar.
///
/// `created_at` is the store's sort key, kept as the original string so
/// lexicographic and chronological order agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageGroup {
    pub uuid: String,
    pub display_name: String,
    pub handle: String,
    pub message: String,
    pub created_at: String,
}
