//! Error types for the messaging client

use thiserror::Error;

/// Errors returned by [`MessagingClient`](crate::MessagingClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// `initialize()` has not completed yet
    #[error("client not initialized, call initialize() first")]
    NotInitialized,

    /// No successful `authorize()` on this client
    #[error("not authorized, call authorize(project, key) first with valid credentials")]
    NotAuthorized,

    /// The configured canister id is not a valid principal
    #[error("invalid canister id {id}: {reason}")]
    InvalidCanisterId { id: String, reason: String },

    /// Transport or replica failure reported by the agent
    #[error("agent error: {0}")]
    Agent(#[from] ic_agent::AgentError),

    /// Candid argument encoding or reply decoding failed
    #[error("candid error: {0}")]
    Candid(#[from] candid::Error),

    /// A message timestamp does not fit in an `i64`
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidConfig(e.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
