//! Typed interface of the messaging canister
//!
//! [`MessagingService`] mirrors the canister's candid service one method per
//! operation. [`CanisterService`] is the implementation that talks to a real
//! canister through an [`ic_agent::Agent`].

use async_trait::async_trait;
use candid::{CandidType, Encode, Nat, Principal};
use ic_agent::Agent;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientResult;
use crate::message::RawMessage;

const SEND_MESSAGE: &str = "sendMessage";
const RECEIVE_MESSAGES: &str = "receiveMessages";
const EDIT_MESSAGE: &str = "editMessage";
const DELETE_USER_MESSAGES: &str = "deleteUserMessages";
const CLEAR_MESSAGES: &str = "clearMessages";
const HARASSMENT_LEVEL: &str = "harassmentLevel";
const SUGGEST_IMPROVED_MESSAGE: &str = "suggestImprovedMessage";
const VALIDATE_KEY: &str = "validateKey";

/// Operations exposed by the messaging canister
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn send_message(&self, sender: &str, receiver: &str, content: &str) -> ClientResult<bool>;

    /// Query call, no state change on the canister
    async fn receive_messages(&self, user: &str) -> ClientResult<Vec<RawMessage>>;

    async fn edit_message(&self, address: &str, index: Nat, new_content: &str) -> ClientResult<bool>;

    async fn delete_user_messages(&self, address: &str) -> ClientResult<bool>;

    async fn clear_messages(&self) -> ClientResult<bool>;

    async fn harassment_level(&self, content: &str) -> ClientResult<String>;

    async fn suggest_improved_message(&self, content: &str) -> ClientResult<String>;

    async fn validate_key(&self, project: &str, key: &str) -> ClientResult<bool>;
}

/// [`MessagingService`] backed by an agent connection to a deployed canister
#[derive(Clone)]
pub struct CanisterService {
    agent: Agent,
    canister_id: Principal,
}

impl CanisterService {
    /// Bind the canister interface to an agent connection
    pub fn new(agent: Agent, canister_id: Principal) -> Self {
        Self { agent, canister_id }
    }

    /// Get the principal of the bound canister
    pub fn canister_id(&self) -> &Principal {
        &self.canister_id
    }

    async fn update<R>(&self, method: &str, arg: Vec<u8>) -> ClientResult<R>
    where
        R: CandidType + for<'de> Deserialize<'de>,
    {
        debug!(canister = %self.canister_id, method, "update call");
        let reply = self
            .agent
            .update(&self.canister_id, method)
            .with_arg(arg)
            .call_and_wait()
            .await?;
        Ok(candid::decode_one(&reply)?)
    }

    async fn query<R>(&self, method: &str, arg: Vec<u8>) -> ClientResult<R>
    where
        R: CandidType + for<'de> Deserialize<'de>,
    {
        debug!(canister = %self.canister_id, method, "query call");
        let reply = self
            .agent
            .query(&self.canister_id, method)
            .with_arg(arg)
            .call()
            .await?;
        Ok(candid::decode_one(&reply)?)
    }
}

#[async_trait]
impl MessagingService for CanisterService {
    async fn send_message(&self, sender: &str, receiver: &str, content: &str) -> ClientResult<bool> {
        self.update(SEND_MESSAGE, Encode!(&sender, &receiver, &content)?)
            .await
    }

    async fn receive_messages(&self, user: &str) -> ClientResult<Vec<RawMessage>> {
        self.query(RECEIVE_MESSAGES, Encode!(&user)?).await
    }

    async fn edit_message(&self, address: &str, index: Nat, new_content: &str) -> ClientResult<bool> {
        self.update(EDIT_MESSAGE, Encode!(&address, &index, &new_content)?)
            .await
    }

    async fn delete_user_messages(&self, address: &str) -> ClientResult<bool> {
        self.update(DELETE_USER_MESSAGES, Encode!(&address)?).await
    }

    async fn clear_messages(&self) -> ClientResult<bool> {
        self.update(CLEAR_MESSAGES, Encode!()?).await
    }

    async fn harassment_level(&self, content: &str) -> ClientResult<String> {
        self.update(HARASSMENT_LEVEL, Encode!(&content)?).await
    }

    async fn suggest_improved_message(&self, content: &str) -> ClientResult<String> {
        self.update(SUGGEST_IMPROVED_MESSAGE, Encode!(&content)?)
            .await
    }

    async fn validate_key(&self, project: &str, key: &str) -> ClientResult<bool> {
        self.update(VALIDATE_KEY, Encode!(&project, &key)?).await
    }
}
