//! Network Layer
//!
//! HTTP/1.1 request/response surface. Nothing in here holds state beyond
//! a shared handle to the store; all durable state goes through `store/`.

pub mod protocol;
pub mod router;
pub mod server;

// Re-export key types
pub use protocol::{SaveScoreFailure, SaveScoreRequest, SaveScoreResponse};
pub use router::ApiRouter;
pub use server::{GameServer, ServerConfig, ServerError};
