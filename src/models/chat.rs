use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Room used by the patient dashboard chat
pub const PATIENT_ROOM: &str = "patient";

/// Sender name used when the patient has not entered one
pub const DEFAULT_SENDER: &str = "Guest";

/// Body of `POST /api/messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub room: String,
    pub sender: String,
    pub sender_email: String,
    pub content: String,
}

impl NewMessage {
    pub fn new(
        room: impl Into<String>,
        sender: impl Into<String>,
        sender_email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            sender: sender.into(),
            sender_email: sender_email.into(),
            content: content.into(),
        }
    }

    /// Empty messages are never sent
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A message as returned by `GET /api/messages`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sender: String,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Anything else the backend attaches (timestamps etc.)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ChatMessage {
    /// One chat row, `sender: content`
    pub fn render(&self) -> String {
        format!("{}: {}", self.sender, self.content)
    }
}

/// Envelope of `GET /api/messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub items: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_list_missing_items() {
        let list: MessageList = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_message_list_preserves_server_order() {
        let list: MessageList = serde_json::from_str(
            r#"{"items": [
                {"id": 2, "sender": "Dr. Lee", "content": "Hello", "created_at": "2026-10-01T10:00:00Z"},
                {"id": 1, "sender": "Ana", "content": "Hi"}
            ]}"#,
        )
        .unwrap();

        let rows: Vec<String> = list.items.iter().map(ChatMessage::render).collect();
        assert_eq!(rows, vec!["Dr. Lee: Hello", "Ana: Hi"]);
        assert_eq!(list.items[0].extra["created_at"], "2026-10-01T10:00:00Z");
    }

    #[test]
    fn test_null_fields_render_blank() {
        let list: MessageList = serde_json::from_str(
            r#"{"items":[{"id":1,"sender":null,"content":"hi"},{"id":2,"sender":"Ana","content":null}]}"#,
        )
        .unwrap();

        let rows: Vec<String> = list.items.iter().map(ChatMessage::render).collect();
        assert_eq!(rows, vec![": hi", "Ana: "]);
    }

    #[test]
    fn test_whitespace_content_is_not_empty() {
        assert!(NewMessage::new(PATIENT_ROOM, "Ana", "", "").is_empty());
        assert!(!NewMessage::new(PATIENT_ROOM, "Ana", "", " ").is_empty());
    }
}
