//! Chat data model as delivered by the chat server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content a deleted message is rewritten to, both locally and by the server.
pub const DELETED_SENTINEL: &str = "This message was deleted";

/// Author of a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Avatar URL, if the user uploaded one
    #[serde(default)]
    pub pic: Option<String>,
}

/// A single chat message.
///
/// Messages are immutable apart from the local content override applied when
/// the message is deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub sender: Sender,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender.id == user_id
    }
}

/// Profile of the user viewing the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pic: Option<String>,
}

/// Body of a successful delete call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_server_shape() {
        let json = r#"{
            "_id": "m1",
            "sender": {"_id": "u1", "name": "Asha", "email": "asha@example.com", "pic": null},
            "content": "hello",
            "createdAt": "2024-03-01T10:15:00.000Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.sender.name, "Asha");
        assert!(msg.sender.pic.is_none());
        assert!(msg.is_from("u1"));
        assert!(!msg.is_from("u2"));
    }

    #[test]
    fn test_delete_response_message_is_optional() {
        let empty: DeleteResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);

        let full: DeleteResponse =
            serde_json::from_str(r#"{"message": "Message removed", "success": true}"#).unwrap();
        assert_eq!(full.message.as_deref(), Some("Message removed"));
    }
}
