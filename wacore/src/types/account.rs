use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Move archived chats back to the inbox when new activity arrives.
    pub unarchive_chats: bool,
}

/// What the processing stage knows about the logged-in account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalIdentity {
    /// Our own address, in any device form.
    pub me: String,
    pub settings: AccountSettings,
    /// Number of history sync notifications already processed.
    pub processed_history_count: usize,
}

impl LocalIdentity {
    pub fn new(me: impl Into<String>) -> Self {
        Self {
            me: me.into(),
            ..Default::default()
        }
    }

    pub fn with_unarchive_chats(mut self, unarchive: bool) -> Self {
        self.settings.unarchive_chats = unarchive;
        self
    }
}
