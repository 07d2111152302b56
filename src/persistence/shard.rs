use crate::core::{Result, zero_value_via_default};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShardInfo {
    pub shard_id: i32,
    pub owner: String,
    pub range_id: i64,
    pub stolen_since_renew: i32,
    pub update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetOrCreateShardRequest {
    pub shard_id: i32,
    /// Written when the shard does not exist yet
    pub initial_shard_info: Option<ShardInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetOrCreateShardResponse {
    pub shard_info: ShardInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateShardRequest {
    pub shard_info: ShardInfo,
    pub previous_range_id: i64,
}

zero_value_via_default!(GetOrCreateShardResponse);

/// Shard ownership records
///
/// Unlike the execution store, shard calls take no [`crate::core::Context`].
pub trait ShardManager: Send + Sync {
    fn get_name(&self) -> &str;

    fn get_or_create_shard(
        &self,
        request: &GetOrCreateShardRequest,
    ) -> Result<GetOrCreateShardResponse>;

    fn update_shard(&self, request: &UpdateShardRequest) -> Result<()>;

    fn close(&self);
}
