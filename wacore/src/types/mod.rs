pub mod account;
pub mod chat;
pub mod events;

pub use account::{AccountSettings, LocalIdentity};
pub use chat::{Chat, ChatUpdate};
