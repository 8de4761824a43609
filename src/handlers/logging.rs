use super::traits::ProtocolEventHandler;
use async_trait::async_trait;
use log::info;
use wacore::process_message::{ProtocolEvent, ProtocolEventKind};
use wacore::types::events::ProtocolEventReceived;

/// Handler for protocol events that have no processing of their own yet.
///
/// It records what arrived and reports the event as handled.
pub struct LoggingHandler {
    kind: ProtocolEventKind,
}

impl LoggingHandler {
    pub fn new(kind: ProtocolEventKind) -> Self {
        Self { kind }
    }

    /// One handler per known protocol event kind.
    pub fn for_all_kinds() -> Vec<Self> {
        [
            ProtocolEventKind::HistorySyncNotification,
            ProtocolEventKind::AppStateSyncKeyShare,
            ProtocolEventKind::Revoke,
            ProtocolEventKind::EphemeralSetting,
            ProtocolEventKind::PeerDataOperationRequest,
        ]
        .into_iter()
        .map(Self::new)
        .collect()
    }
}

#[async_trait]
impl ProtocolEventHandler for LoggingHandler {
    fn kind(&self) -> ProtocolEventKind {
        self.kind
    }

    async fn handle(&self, received: &ProtocolEventReceived) -> bool {
        match &received.event {
            ProtocolEvent::HistorySyncNotification {
                notification,
                is_latest,
            } => info!(
                "History sync notification in {} (chunk {:?}, latest: {})",
                received.chat_id, notification.chunk_order, is_latest
            ),
            ProtocolEvent::AppStateSyncKeyShare { share } => info!(
                "Received {} app state sync key(s) in {}",
                share.keys.len(),
                received.chat_id
            ),
            ProtocolEvent::Revoke { key } => info!(
                "Message {:?} revoked in {}",
                key.as_ref().and_then(|k| k.id.as_deref()),
                received.chat_id
            ),
            ProtocolEvent::EphemeralSetting { expiration, .. } => info!(
                "Disappearing messages in {} set to {}s",
                received.chat_id, expiration
            ),
            ProtocolEvent::PeerDataOperationRequest { request } => info!(
                "Peer data operation request {:?} from {}",
                request.peer_data_operation_request_type, received.chat_id
            ),
        }
        true
    }
}
