pub mod process_message;
pub mod proto_helpers;
pub mod store;
pub mod stub_types;
pub mod types;

pub use process_message::{
    Classification, Normalize, NormalizedMessage, ProcessError, ProtocolEvent, ProtocolEventKind,
    ReferenceKind, classify,
};
