use crate::store::error::Result;
use crate::types::chat::Chat;
use async_trait::async_trait;

/// Persistence for chat state.
///
/// Implementations only need to be consistent per key; callers serialize
/// read-modify-write cycles for the same chat themselves.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn get_chat(&self, id: &str) -> Result<Option<Chat>>;
    /// Stores `chat`, merging it into any existing record with the same id.
    async fn put_chat(&self, chat: Chat) -> Result<()>;
    async fn chat_ids(&self) -> Result<Vec<String>>;
}
