use super::DataBlob;
use crate::core::{Result, ZeroValue, zero_value_via_default};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a message in a queue or its DLQ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub i64);

impl MessageId {
    /// Id of a message that has not been assigned a position
    pub const EMPTY: MessageId = MessageId(-1);

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl ZeroValue for MessageId {
    fn zero_value() -> Self {
        Self::EMPTY
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueMessage {
    pub id: MessageId,
    pub data: DataBlob,
}

/// Ack levels of a queue, stored as one versioned blob
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueueMetadata {
    pub blob: DataBlob,
    pub version: i64,
}

zero_value_via_default!(QueueMetadata);

/// Ordered message queue with a dead letter companion
pub trait Queue: Send + Sync {
    /// Writes the initial ack level metadata if the queue has none
    fn init(&self, blob: &DataBlob) -> Result<()>;

    fn enqueue_message(&self, blob: &DataBlob) -> Result<()>;

    fn read_messages(
        &self,
        last_message_id: MessageId,
        max_count: usize,
    ) -> Result<Vec<QueueMessage>>;

    fn delete_messages_before(&self, message_id: MessageId) -> Result<()>;

    fn update_ack_level(&self, metadata: &QueueMetadata) -> Result<()>;

    fn get_ack_levels(&self) -> Result<QueueMetadata>;

    /// Returns the id assigned to the dead lettered message
    fn enqueue_message_to_dlq(&self, blob: &DataBlob) -> Result<MessageId>;

    /// Returns one page of DLQ messages and the token of the next page
    fn read_messages_from_dlq(
        &self,
        first_message_id: MessageId,
        last_message_id: MessageId,
        page_size: usize,
        page_token: &[u8],
    ) -> Result<(Vec<QueueMessage>, Vec<u8>)>;

    fn delete_message_from_dlq(&self, message_id: MessageId) -> Result<()>;

    fn range_delete_messages_from_dlq(
        &self,
        first_message_id: MessageId,
        last_message_id: MessageId,
    ) -> Result<()>;

    fn update_dlq_ack_level(&self, metadata: &QueueMetadata) -> Result<()>;

    fn get_dlq_ack_levels(&self) -> Result<QueueMetadata>;

    fn close(&self);
}
