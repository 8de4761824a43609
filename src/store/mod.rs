pub mod memory;

pub use memory::InMemoryChatStore;
pub use wacore::store::{ChatStore, StoreError};
