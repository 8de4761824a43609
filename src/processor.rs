use crate::config::ProcessorConfig;
use crate::error::ProcessorError;
use crate::handlers::ProtocolEventRouter;
use crate::types::events::{ChatUpdated, EventBus, MessageProcessed, ProtocolEventReceived};
use dashmap::DashMap;
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use wacore::process_message::{Normalize, ProtocolEventKind, classify};
use wacore::store::ChatStore;
use wacore::types::account::LocalIdentity;
use wacore::types::chat::{Chat, ChatUpdate};
use waproto::whatsapp as wa;

/// What processing one envelope produced.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub message: Arc<MessageProcessed>,
    /// The stored chat after this envelope, if it changed anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_event: Option<Arc<ProtocolEventReceived>>,
}

/// Runs inbound envelopes through normalization and classification, applies the
/// resulting chat changes and fans out events.
///
/// Envelopes for different chats may be processed concurrently. Updates to the same
/// chat are applied one at a time in the order they acquire the chat's lock.
pub struct MessageProcessor {
    store: Arc<dyn ChatStore>,
    identity: RwLock<LocalIdentity>,
    config: ProcessorConfig,
    chat_locks: DashMap<String, Arc<Mutex<()>>>,
    router: ProtocolEventRouter,
    event_bus: EventBus,
}

impl MessageProcessor {
    pub fn new(
        store: Arc<dyn ChatStore>,
        identity: LocalIdentity,
        config: ProcessorConfig,
    ) -> Self {
        let event_bus = EventBus::with_capacity(config.event_channel_capacity.max(1));
        Self {
            store,
            identity: RwLock::new(identity),
            config,
            chat_locks: DashMap::new(),
            router: ProtocolEventRouter::default(),
            event_bus,
        }
    }

    pub fn with_router(mut self, router: ProtocolEventRouter) -> Self {
        self.router = router;
        self
    }

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub async fn identity(&self) -> LocalIdentity {
        self.identity.read().await.clone()
    }

    /// Processes one inbound envelope end to end.
    ///
    /// Fails only when the envelope's own identity is missing or malformed, or the
    /// chat store fails. Nothing is stored or emitted for an envelope that fails
    /// identity checks.
    ///
    /// Each history sync notification that will be routed takes the next slot of
    /// `processed_history_count` up front, so exactly one of several overlapping
    /// notifications is reported as the latest.
    pub async fn process(
        &self,
        info: wa::WebMessageInfo,
    ) -> Result<ProcessOutcome, ProcessorError> {
        let mut identity = self.identity().await;

        let normalized = info.normalize(&identity.me)?;
        if self.config.process_history_sync && normalized.is_history_sync_notification() {
            let mut current = self.identity.write().await;
            identity.processed_history_count = current.processed_history_count;
            current.processed_history_count += 1;
        }
        if let Some(kind) = normalized.unresolved_reference() {
            warn!(
                "Message {:?} has an unidentified {:?} reference, left as is",
                normalized.key().id,
                kind
            );
        }

        let classification = classify(&normalized, &identity)?;
        let chat_id = classification.chat_update.id.clone();
        debug!(
            "Processed message {:?} in {} (real: {})",
            normalized.key().id,
            chat_id,
            classification.is_real
        );

        let chat = if classification.chat_update.is_noop() {
            None
        } else {
            Some(self.apply_chat_update(&classification.chat_update).await?)
        };

        let message_id = normalized.key().id.clone();
        let dispatched = classification.dispatched.clone();
        let message = Arc::new(MessageProcessed {
            unresolved_reference: normalized.unresolved_reference(),
            info: normalized.into_inner(),
            chat_id: chat_id.clone(),
            classification,
        });
        let _ = self.event_bus.message.send(message.clone());

        let protocol_event = match dispatched {
            Some(event) => {
                let received = Arc::new(ProtocolEventReceived {
                    chat_id,
                    message_id,
                    event,
                });
                let _ = self.event_bus.protocol_event.send(received.clone());
                self.route_protocol_event(&received).await;
                Some(received)
            }
            None => None,
        };

        Ok(ProcessOutcome {
            message,
            chat,
            protocol_event,
        })
    }

    /// Loads, updates and stores one chat while holding that chat's lock.
    async fn apply_chat_update(&self, update: &ChatUpdate) -> Result<Chat, ProcessorError> {
        let mutex_arc = self
            .chat_locks
            .entry(update.id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _lock_guard = mutex_arc.lock().await;

        let existing = self.store.get_chat(&update.id).await?;
        let created = existing.is_none();
        let mut chat = existing.unwrap_or_else(|| Chat::new(update.id.clone()));
        update.apply(&mut chat);
        self.store.put_chat(chat.clone()).await?;

        let _ = self.event_bus.chat_update.send(Arc::new(ChatUpdated {
            chat: chat.clone(),
            update: update.clone(),
            created,
        }));
        Ok(chat)
    }

    async fn route_protocol_event(&self, received: &ProtocolEventReceived) {
        let kind = received.event.kind();
        if kind == ProtocolEventKind::HistorySyncNotification && !self.config.process_history_sync {
            debug!("History sync processing disabled, skipping notification");
            return;
        }

        if !self.router.dispatch(received).await {
            warn!("No handler accepted protocol event {kind:?}");
        }
    }
}
