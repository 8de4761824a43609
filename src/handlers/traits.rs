use async_trait::async_trait;
use wacore::process_message::ProtocolEventKind;
use wacore::types::events::ProtocolEventReceived;

/// Trait for handling one kind of protocol message carried inside an envelope.
///
/// Handlers run after the envelope's chat update has been stored.
#[async_trait]
pub trait ProtocolEventHandler: Send + Sync {
    /// The protocol event kind this handler is responsible for.
    fn kind(&self) -> ProtocolEventKind;

    /// Returns `true` if the event was handled.
    async fn handle(&self, event: &ProtocolEventReceived) -> bool;
}
