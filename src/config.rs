use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Canister the client talks to when none is configured
pub const DEFAULT_CANISTER_ID: &str = "usxsn-hyaaa-aaaad-aapxq-cai";

/// Public boundary node used when no host is configured
pub const DEFAULT_HOST: &str = "https://icp-api.io";

/// Address of a replica started with `dfx start`
pub const LOCAL_REPLICA_HOST: &str = "http://127.0.0.1:4943";

/// Environment variable read by [`ClientConfig::from_env`] for the canister id
pub const ENV_CANISTER_ID: &str = "IC_MESSAGING_CANISTER_ID";
/// Environment variable read by [`ClientConfig::from_env`] for the host
pub const ENV_HOST: &str = "IC_MESSAGING_HOST";
/// Environment variable read by [`ClientConfig::from_env`] for the local flag
pub const ENV_LOCAL: &str = "IC_MESSAGING_LOCAL";

/// Connection settings for a [`MessagingClient`](crate::MessagingClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Textual principal of the messaging canister
    pub canister_id: String,
    /// URL of the boundary node or replica
    pub host: String,
    /// Local replicas use a self-generated root key, which has to be fetched
    /// before any certified response can be verified
    pub is_local: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            canister_id: DEFAULT_CANISTER_ID.to_string(),
            host: DEFAULT_HOST.to_string(),
            is_local: false,
        }
    }
}

impl ClientConfig {
    /// Settings for a canister deployed on a local replica
    pub fn local_replica(canister_id: impl Into<String>) -> Self {
        Self {
            canister_id: canister_id.into(),
            host: LOCAL_REPLICA_HOST.to_string(),
            is_local: true,
        }
    }

    /// Target a different canister
    pub fn with_canister_id(mut self, canister_id: impl Into<String>) -> Self {
        self.canister_id = canister_id.into();
        self
    }

    /// Connect through a different boundary node or replica
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Mark the target as a local replica
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    /// Load settings from `IC_MESSAGING_*` environment variables.
    ///
    /// Unset variables keep their defaults. `IC_MESSAGING_LOCAL` accepts
    /// `true`/`false`/`1`/`0`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Parse settings from JSON, missing fields keep their defaults
    pub fn from_json(json: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(canister_id) = lookup(ENV_CANISTER_ID) {
            config.canister_id = canister_id;
        }
        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(local) = lookup(ENV_LOCAL) {
            config.is_local = parse_flag(&local).ok_or_else(|| {
                ClientError::InvalidConfig(format!("{ENV_LOCAL} must be a boolean, got {local:?}"))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
