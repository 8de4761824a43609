use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use wacore::store::error::Result;
use wacore::store::traits::ChatStore;
use wacore::types::chat::Chat;

/// Chat store kept entirely in memory. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryChatStore {
    chats: Arc<RwLock<HashMap<String, Chat>>>,
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self {
            chats: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.chats.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chats.read().await.is_empty()
    }

    /// All stored chats, ordered by id.
    pub async fn snapshot(&self) -> Vec<Chat> {
        let chats = self.chats.read().await;
        let mut all: Vec<Chat> = chats.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn get_chat(&self, id: &str) -> Result<Option<Chat>> {
        let chats = self.chats.read().await;
        Ok(chats.get(id).cloned())
    }

    async fn put_chat(&self, chat: Chat) -> Result<()> {
        let mut chats = self.chats.write().await;
        match chats.get_mut(&chat.id) {
            Some(existing) => {
                existing.merge(chat);
            }
            None => {
                chats.insert(chat.id.clone(), chat);
            }
        }
        Ok(())
    }

    async fn chat_ids(&self) -> Result<Vec<String>> {
        let chats = self.chats.read().await;
        let mut ids: Vec<String> = chats.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
