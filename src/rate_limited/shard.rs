use super::{RateLimitedClient, rate_limited};
use crate::persistence::*;

impl<P: ShardManager + ?Sized> ShardManager for RateLimitedClient<P> {
    fn get_name(&self) -> &str {
        self.persistence.get_name()
    }

    rate_limited! {
        "shard";
        fn get_or_create_shard(&self, request: &GetOrCreateShardRequest) -> GetOrCreateShardResponse;
        fn update_shard(&self, request: &UpdateShardRequest) -> ();
    }

    fn close(&self) {
        self.persistence.close();
    }
}
