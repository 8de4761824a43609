use thiserror::Error;
use wacore::process_message::ProcessError;
use wacore::store::StoreError;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("message processing failed: {0}")]
    Process(#[from] ProcessError),
    #[error("chat store error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
