use crate::process_message::{Classification, ProtocolEvent, ReferenceKind};
use crate::types::chat::{Chat, ChatUpdate};
use serde::Serialize;
use wacore_binary::jid::MessageId;
use waproto::whatsapp as wa;

/// An envelope made it through normalization and classification.
#[derive(Debug, Clone, Serialize)]
pub struct MessageProcessed {
    /// The envelope with its keys normalized.
    pub info: wa::WebMessageInfo,
    pub chat_id: String,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved_reference: Option<ReferenceKind>,
}

/// A chat's stored state changed.
#[derive(Debug, Clone, Serialize)]
pub struct ChatUpdated {
    /// State after the update was applied.
    pub chat: Chat,
    pub update: ChatUpdate,
    /// The chat did not exist before this update.
    pub created: bool,
}

/// A protocol message was recognised and handed off.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolEventReceived {
    pub chat_id: String,
    pub message_id: Option<MessageId>,
    pub event: ProtocolEvent,
}
