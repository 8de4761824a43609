pub use wacore::{process_message, proto_helpers, store::traits, stub_types};

// Core types are re-exported, but events (with EventBus) remain here
pub mod types {
    pub use wacore::types::*;
    pub mod events;
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod processor;
pub mod store;

pub use config::ProcessorConfig;
pub use error::ProcessorError;
pub use processor::{MessageProcessor, ProcessOutcome};
