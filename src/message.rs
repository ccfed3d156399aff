use candid::{CandidType, Int};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A message record as the canister encodes it
#[derive(CandidType, Deserialize, Debug, Clone, PartialEq)]
pub struct RawMessage {
    pub sender: String,
    pub receiver: String,
    pub content: String,
    /// Arbitrary precision `int`, nanoseconds since the epoch on the canister
    pub timestamp: Int,
}

/// A message for application use
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub timestamp: i64,
}

impl TryFrom<RawMessage> for Message {
    type Error = ClientError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let timestamp = i64::try_from(&raw.timestamp.0)
            .map_err(|_| ClientError::TimestampOutOfRange(raw.timestamp.to_string()))?;

        Ok(Self {
            sender: raw.sender,
            receiver: raw.receiver,
            content: raw.content,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(timestamp: Int) -> RawMessage {
        RawMessage {
            sender: "alice".to_string(),
            receiver: "bob".to_string(),
            content: "hi".to_string(),
            timestamp,
        }
    }

    #[test]
    fn test_narrowing_keeps_fields() {
        let message = Message::try_from(raw(Int::from(1_750_486_429_293_560_682_i64))).unwrap();
        assert_eq!(message.sender, "alice");
        assert_eq!(message.receiver, "bob");
        assert_eq!(message.content, "hi");
        assert_eq!(message.timestamp, 1_750_486_429_293_560_682);
    }

    #[test]
    fn test_narrowing_extremes() {
        assert_eq!(Message::try_from(raw(Int::from(i64::MAX))).unwrap().timestamp, i64::MAX);
        assert_eq!(Message::try_from(raw(Int::from(i64::MIN))).unwrap().timestamp, i64::MIN);
    }

    #[test]
    fn test_narrowing_rejects_overflow() {
        let too_big = Int::from(i128::from(i64::MAX) + 1);
        let result = Message::try_from(raw(too_big));
        assert!(matches!(result, Err(ClientError::TimestampOutOfRange(_))));
    }
}
