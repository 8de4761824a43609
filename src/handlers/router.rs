use super::logging::LoggingHandler;
use super::traits::ProtocolEventHandler;
use std::collections::HashMap;
use std::sync::Arc;
use wacore::process_message::ProtocolEventKind;
use wacore::types::events::ProtocolEventReceived;

/// Central router for dispatching protocol events to their handlers.
pub struct ProtocolEventRouter {
    handlers: HashMap<ProtocolEventKind, Arc<dyn ProtocolEventHandler>>,
}

impl ProtocolEventRouter {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A router where every known kind is handled by a [`LoggingHandler`].
    pub fn with_logging_handlers() -> Self {
        let mut router = Self::new();
        for handler in LoggingHandler::for_all_kinds() {
            router.register(Arc::new(handler));
        }
        router
    }

    /// Register a handler for its kind, returning the handler it replaced.
    pub fn register(
        &mut self,
        handler: Arc<dyn ProtocolEventHandler>,
    ) -> Option<Arc<dyn ProtocolEventHandler>> {
        self.handlers.insert(handler.kind(), handler)
    }

    /// Returns `true` if a handler was found and it handled the event.
    pub async fn dispatch(&self, event: &ProtocolEventReceived) -> bool {
        match self.handlers.get(&event.event.kind()) {
            Some(handler) => handler.handle(event).await,
            None => false,
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ProtocolEventRouter {
    fn default() -> Self {
        Self::with_logging_handlers()
    }
}
