//! # IC Messaging Client
//!
//! A Rust client for the messaging and moderation canister on the Internet
//! Computer.
//!
//! ## Features
//!
//! - Send, receive, edit and delete messages
//! - Harassment scoring and message rewrite suggestions
//! - Project key validation gating every other call
//! - Local replica support (root key bootstrap)
//!
//! ## Example
//!
//! ```no_run
//! use ic_messaging_client::{ClientConfig, MessagingClient};
//!
//! # async fn example() -> Result<(), ic_messaging_client::ClientError> {
//! // Create and connect the client
//! let mut client = MessagingClient::new(ClientConfig::default());
//! client.initialize().await?;
//!
//! // Authorize with a project key
//! if !client.authorize("my-project", "my-project-key").await? {
//!     return Ok(());
//! }
//!
//! // Send a message
//! client.send_message("alice", "bob", "Hello, how are you?").await?;
//!
//! // Get messages
//! let messages = client.receive_messages("bob").await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod message;
mod service;

pub use client::{Credentials, MessagingClient};
pub use config::{
    ClientConfig, DEFAULT_CANISTER_ID, DEFAULT_HOST, ENV_CANISTER_ID, ENV_HOST, ENV_LOCAL,
    LOCAL_REPLICA_HOST,
};
pub use error::{ClientError, ClientResult};
pub use message::{Message, RawMessage};
pub use service::{CanisterService, MessagingService};

pub use candid::{Int, Nat, Principal};
pub use ic_agent::agent::status::Status;
