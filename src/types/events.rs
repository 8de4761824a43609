use crate::config::DEFAULT_EVENT_CHANNEL_CAPACITY;
use std::sync::Arc;
use tokio::sync::broadcast;
pub use wacore::types::events::*;

// Macro to generate EventBus fields and constructors
macro_rules! define_event_bus {
    ($(($field:ident, $type:ty)),* $(,)?) => {
        /// Typed event bus that provides separate broadcast channels for each event type.
        #[derive(Debug)]
        pub struct EventBus {
            $(
                pub $field: broadcast::Sender<$type>,
            )*
        }

        impl EventBus {
            pub fn new() -> Self {
                Self::with_capacity(DEFAULT_EVENT_CHANNEL_CAPACITY)
            }

            /// # Panics
            /// Panics if `capacity` is zero.
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    $(
                        $field: broadcast::channel(capacity).0,
                    )*
                }
            }
        }
    };
}

define_event_bus! {
    (message, Arc<MessageProcessed>),
    (chat_update, Arc<ChatUpdated>),
    (protocol_event, Arc<ProtocolEventReceived>),
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
