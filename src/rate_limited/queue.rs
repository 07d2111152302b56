use super::{RateLimitedClient, rate_limited};
use crate::core::Result;
use crate::persistence::*;

impl<P: Queue + ?Sized> Queue for RateLimitedClient<P> {
    /// Always reaches the wrapped queue: initialization is never shed.
    fn init(&self, blob: &DataBlob) -> Result<()> {
        self.persistence.init(blob)
    }

    rate_limited! {
        "queue";
        fn enqueue_message(&self, blob: &DataBlob) -> ();
        fn read_messages(&self, last_message_id: MessageId, max_count: usize) -> Vec<QueueMessage>;
        fn delete_messages_before(&self, message_id: MessageId) -> ();
        fn update_ack_level(&self, metadata: &QueueMetadata) -> ();
        fn get_ack_levels(&self) -> QueueMetadata;
        fn enqueue_message_to_dlq(&self, blob: &DataBlob) -> MessageId;
        fn read_messages_from_dlq(
            &self,
            first_message_id: MessageId,
            last_message_id: MessageId,
            page_size: usize,
            page_token: &[u8]
        ) -> (Vec<QueueMessage>, Vec<u8>);
        fn delete_message_from_dlq(&self, message_id: MessageId) -> ();
        fn range_delete_messages_from_dlq(&self, first_message_id: MessageId, last_message_id: MessageId) -> ();
        fn update_dlq_ack_level(&self, metadata: &QueueMetadata) -> ();
        fn get_dlq_ack_levels(&self) -> QueueMetadata;
    }

    fn close(&self) {
        self.persistence.close();
    }
}
