use serde::{Deserialize, Serialize};

/// Persisted state of a single chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: String,
    pub name: Option<String>,
    pub conversation_timestamp: Option<u64>,
    pub unread_count: u32,
    pub archived: Option<bool>,
    pub read_only: Option<bool>,
}

impl Chat {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Folds a newer snapshot of the same chat into this one.
    ///
    /// Every optional field prefers the newer value and falls back to the stored one.
    /// The unread counter has no "unset" state, so it always takes the newer count.
    /// Snapshots of a different chat are ignored; returns whether anything was merged.
    pub fn merge(&mut self, newer: Chat) -> bool {
        if self.id != newer.id {
            return false;
        }
        let Chat {
            id: _,
            name,
            conversation_timestamp,
            unread_count,
            archived,
            read_only,
        } = newer;

        self.name = name.or(self.name.take());
        self.conversation_timestamp = conversation_timestamp.or(self.conversation_timestamp);
        self.unread_count = unread_count;
        self.archived = archived.or(self.archived);
        self.read_only = read_only.or(self.read_only);
        true
    }
}

/// Change to a chat derived from one inbound message.
///
/// Fields left as `None` must not overwrite what is already stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatUpdate {
    pub id: String,
    pub conversation_timestamp: Option<u64>,
    pub unread_delta: i32,
    pub archived: Option<bool>,
    pub read_only: Option<bool>,
}

impl ChatUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_noop(&self) -> bool {
        self.conversation_timestamp.is_none()
            && self.unread_delta == 0
            && self.archived.is_none()
            && self.read_only.is_none()
    }

    /// Applies this update to the stored chat. Returns `false` (and leaves the chat
    /// alone) when the update targets a different chat.
    pub fn apply(&self, chat: &mut Chat) -> bool {
        if chat.id != self.id {
            return false;
        }
        if let Some(ts) = self.conversation_timestamp {
            chat.conversation_timestamp = Some(ts);
        }
        chat.unread_count = chat.unread_count.saturating_add_signed(self.unread_delta);
        if let Some(archived) = self.archived {
            chat.archived = Some(archived);
        }
        if let Some(read_only) = self.read_only {
            chat.read_only = Some(read_only);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_new_values() {
        let mut stored = Chat {
            id: "1@s.whatsapp.net".into(),
            name: Some("Alice".into()),
            conversation_timestamp: Some(10),
            unread_count: 2,
            archived: Some(true),
            read_only: None,
        };
        let merged = stored.merge(Chat {
            id: "1@s.whatsapp.net".into(),
            conversation_timestamp: Some(20),
            unread_count: 3,
            read_only: Some(false),
            ..Default::default()
        });

        assert!(merged);
        assert_eq!(stored.name.as_deref(), Some("Alice"));
        assert_eq!(stored.conversation_timestamp, Some(20));
        assert_eq!(stored.unread_count, 3);
        assert_eq!(stored.archived, Some(true));
        assert_eq!(stored.read_only, Some(false));
    }

    #[test]
    fn test_merge_ignores_other_chat() {
        let mut stored = Chat::new("1@s.whatsapp.net");
        let before = stored.clone();
        assert!(!stored.merge(Chat {
            id: "2@s.whatsapp.net".into(),
            name: Some("Bob".into()),
            ..Default::default()
        }));
        assert_eq!(stored, before);
    }

    #[test]
    fn test_apply_leaves_unset_fields() {
        let mut chat = Chat {
            id: "g@g.us".into(),
            conversation_timestamp: Some(5),
            unread_count: 1,
            archived: Some(true),
            read_only: Some(true),
            ..Default::default()
        };
        let update = ChatUpdate {
            id: "g@g.us".into(),
            unread_delta: 1,
            ..Default::default()
        };
        assert!(update.apply(&mut chat));
        assert_eq!(chat.conversation_timestamp, Some(5));
        assert_eq!(chat.unread_count, 2);
        assert_eq!(chat.archived, Some(true));
        assert_eq!(chat.read_only, Some(true));
    }

    #[test]
    fn test_apply_unarchives_and_saturates() {
        let mut chat = Chat {
            id: "g@g.us".into(),
            archived: Some(true),
            ..Default::default()
        };
        let update = ChatUpdate {
            id: "g@g.us".into(),
            conversation_timestamp: Some(99),
            unread_delta: -3,
            archived: Some(false),
            read_only: Some(false),
        };
        assert!(update.apply(&mut chat));
        assert_eq!(chat.unread_count, 0);
        assert_eq!(chat.archived, Some(false));
        assert_eq!(chat.read_only, Some(false));
        assert_eq!(chat.conversation_timestamp, Some(99));
    }

    #[test]
    fn test_chat_from_partial_json() {
        let chat: Chat =
            serde_json::from_str(r#"{"id":"1@s.whatsapp.net","archived":true}"#).unwrap();
        assert_eq!(chat.unread_count, 0);
        assert_eq!(chat.archived, Some(true));
        assert_eq!(chat.conversation_timestamp, None);
    }

    #[test]
    fn test_noop_update() {
        assert!(ChatUpdate::new("x@s.whatsapp.net").is_noop());
        let update = ChatUpdate {
            unread_delta: 1,
            ..ChatUpdate::new("x@s.whatsapp.net")
        };
        assert!(!update.is_noop());
    }
}
