pub mod logging;
pub mod router;
pub mod traits;

pub use logging::LoggingHandler;
pub use router::ProtocolEventRouter;
pub use traits::ProtocolEventHandler;
