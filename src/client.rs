use candid::{Nat, Principal};
use ic_agent::agent::status::Status;
use ic_agent::Agent;
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::message::Message;
use crate::service::{CanisterService, MessagingService};

/// Project name and key accepted by the canister's `validateKey`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub project: String,
    pub key: String,
}

/// Main client for the messaging canister
///
/// Every operation other than [`validate_key`](Self::validate_key) and
/// [`get_canister_status`](Self::get_canister_status) requires a prior
/// successful [`authorize`](Self::authorize).
pub struct MessagingClient {
    config: ClientConfig,
    agent: Option<Agent>,
    service: Option<Box<dyn MessagingService>>,
    credentials: Option<Credentials>,
}

impl MessagingClient {
    /// Create an uninitialized client
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            agent: None,
            service: None,
            credentials: None,
        }
    }

    /// Create a client that delegates to an already built service.
    ///
    /// No agent connection is held, so [`get_canister_status`](Self::get_canister_status)
    /// fails with [`ClientError::NotInitialized`].
    pub fn with_service(config: ClientConfig, service: impl MessagingService + 'static) -> Self {
        Self {
            config,
            agent: None,
            service: Some(Box::new(service)),
            credentials: None,
        }
    }

    /// Connect to the configured host and bind the canister interface
    pub async fn initialize(&mut self) -> ClientResult<()> {
        match self.connect().await {
            Ok((agent, service)) => {
                self.agent = Some(agent);
                self.service = Some(Box::new(service));
                info!(
                    canister = %self.config.canister_id,
                    host = %self.config.host,
                    "messaging client initialized"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to initialize messaging client");
                Err(e)
            }
        }
    }

    async fn connect(&self) -> ClientResult<(Agent, CanisterService)> {
        let canister_id = Principal::from_text(&self.config.canister_id).map_err(|e| {
            ClientError::InvalidCanisterId {
                id: self.config.canister_id.clone(),
                reason: e.to_string(),
            }
        })?;

        let agent = Agent::builder().with_url(self.config.host.as_str()).build()?;

        // Local replicas are not signed by the mainnet root key
        if self.config.is_local {
            agent.fetch_root_key().await?;
        }

        let service = CanisterService::new(agent.clone(), canister_id);
        Ok((agent, service))
    }

    /// Validate `key` for `project` and remember the outcome.
    ///
    /// A rejected key clears any credentials stored by an earlier call.
    pub async fn authorize(&mut self, project: &str, key: &str) -> ClientResult<bool> {
        let valid = self
            .ready()?
            .validate_key(project, key)
            .await
            .inspect_err(|e| error!(error = %e, "error during authorization"))?;

        if valid {
            self.credentials = Some(Credentials {
                project: project.to_string(),
                key: key.to_string(),
            });
            info!(project, "authorization successful");
        } else {
            self.credentials = None;
            info!(project, "authorization failed");
        }

        Ok(valid)
    }

    /// Send a message from `sender` to `receiver`
    pub async fn send_message(&self, sender: &str, receiver: &str, content: &str) -> ClientResult<bool> {
        self.authorized()?
            .send_message(sender, receiver, content)
            .await
            .inspect_err(|e| error!(error = %e, "error sending message"))
    }

    /// Fetch the messages addressed to `user`
    ///
    /// Fails with [`ClientError::TimestampOutOfRange`] for the whole call if any
    /// single record carries a timestamp outside the `i64` range.
    pub async fn receive_messages(&self, user: &str) -> ClientResult<Vec<Message>> {
        let raw = self
            .authorized()?
            .receive_messages(user)
            .await
            .inspect_err(|e| error!(error = %e, "error receiving messages"))?;

        raw.into_iter()
            .map(Message::try_from)
            .collect::<ClientResult<Vec<_>>>()
            .inspect_err(|e| error!(error = %e, "error receiving messages"))
    }

    /// Replace the content of the `index`-th message stored for `address`
    pub async fn edit_message(&self, address: &str, index: u64, new_content: &str) -> ClientResult<bool> {
        self.authorized()?
            .edit_message(address, Nat::from(index), new_content)
            .await
            .inspect_err(|e| error!(error = %e, "error editing message"))
    }

    /// Delete every message sent or received by `address`
    pub async fn delete_user_messages(&self, address: &str) -> ClientResult<bool> {
        self.authorized()?
            .delete_user_messages(address)
            .await
            .inspect_err(|e| error!(error = %e, "error deleting user messages"))
    }

    /// Remove every message held by the canister
    pub async fn clear_messages(&self) -> ClientResult<bool> {
        self.authorized()?
            .clear_messages()
            .await
            .inspect_err(|e| error!(error = %e, "error clearing messages"))
    }

    /// Ask the canister to rate how harassing `content` is
    pub async fn harassment_level(&self, content: &str) -> ClientResult<String> {
        self.authorized()?
            .harassment_level(content)
            .await
            .inspect_err(|e| error!(error = %e, "error checking harassment level"))
    }

    /// Ask the canister for a friendlier rewrite of `content`
    pub async fn suggest_improved_message(&self, content: &str) -> ClientResult<String> {
        self.authorized()?
            .suggest_improved_message(content)
            .await
            .inspect_err(|e| error!(error = %e, "error suggesting improved message"))
    }

    /// Check a key without touching the stored authorization.
    ///
    /// Only requires initialization since this is how authorization is
    /// established in the first place.
    pub async fn validate_key(&self, project: &str, key: &str) -> ClientResult<bool> {
        self.ready()?
            .validate_key(project, key)
            .await
            .inspect_err(|e| error!(error = %e, "error validating key"))
    }

    /// Status of the replica behind the configured host
    pub async fn get_canister_status(&self) -> ClientResult<Status> {
        let agent = self.agent.as_ref().ok_or(ClientError::NotInitialized)?;

        agent
            .status()
            .await
            .map_err(ClientError::from)
            .inspect_err(|e| error!(error = %e, "error getting canister status"))
    }

    /// Whether `initialize()` has completed
    pub fn is_initialized(&self) -> bool {
        self.service.is_some()
    }

    /// Whether the last `authorize()` call succeeded
    pub fn is_authorized(&self) -> bool {
        self.credentials.is_some()
    }

    /// Get the stored project and key, if authorized
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Get the authorized project name
    pub fn authorized_project(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.project.as_str())
    }

    /// Get the connection settings
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the canister id as text
    pub fn canister_id(&self) -> &str {
        &self.config.canister_id
    }

    fn ready(&self) -> ClientResult<&dyn MessagingService> {
        self.service.as_deref().ok_or(ClientError::NotInitialized)
    }

    fn authorized(&self) -> ClientResult<&dyn MessagingService> {
        let service = self.ready()?;
        if self.credentials.is_none() {
            return Err(ClientError::NotAuthorized);
        }
        Ok(service)
    }
}
