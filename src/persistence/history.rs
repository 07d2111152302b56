//! Request and response types of the history tree calls on
//! [`super::ExecutionManager`].

use super::DataBlob;
use crate::core::zero_value_via_default;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct AppendHistoryNodesRequest {
    pub shard_id: i32,
    /// The first append on a branch also writes the branch record
    pub is_new_branch: bool,
    pub info: String,
    pub branch_token: Vec<u8>,
    pub events: Vec<DataBlob>,
    pub prev_transaction_id: i64,
    pub transaction_id: i64,
    pub node_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppendHistoryNodesResponse {
    /// Bytes written
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadHistoryBranchRequest {
    pub shard_id: i32,
    pub branch_token: Vec<u8>,
    pub min_event_id: i64,
    pub max_event_id: i64,
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadHistoryBranchResponse {
    pub history_events: Vec<DataBlob>,
    pub next_page_token: Vec<u8>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadHistoryBranchReverseRequest {
    pub shard_id: i32,
    pub branch_token: Vec<u8>,
    pub max_event_id: i64,
    pub last_first_transaction_id: i64,
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadHistoryBranchReverseResponse {
    pub history_events: Vec<DataBlob>,
    pub next_page_token: Vec<u8>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadHistoryBranchByBatchResponse {
    pub history_batches: Vec<Vec<DataBlob>>,
    pub transaction_ids: Vec<i64>,
    pub next_page_token: Vec<u8>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadRawHistoryBranchResponse {
    pub history_event_blobs: Vec<DataBlob>,
    pub node_ids: Vec<i64>,
    pub next_page_token: Vec<u8>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForkHistoryBranchRequest {
    pub shard_id: i32,
    pub namespace_id: Uuid,
    pub fork_branch_token: Vec<u8>,
    /// The new branch starts from this node, exclusive
    pub fork_node_id: i64,
    pub info: String,
    pub new_run_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForkHistoryBranchResponse {
    pub new_branch_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteHistoryBranchRequest {
    pub shard_id: i32,
    pub branch_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrimHistoryBranchRequest {
    pub shard_id: i32,
    pub branch_token: Vec<u8>,
    pub node_id: i64,
    pub transaction_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrimHistoryBranchResponse {}

#[derive(Debug, Clone, PartialEq)]
pub struct GetHistoryTreeRequest {
    pub shard_id: i32,
    pub tree_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetHistoryTreeResponse {
    pub branch_tokens: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAllHistoryTreeBranchesRequest {
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBranchDetail {
    pub tree_id: Uuid,
    pub branch_id: Uuid,
    pub fork_time: DateTime<Utc>,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetAllHistoryTreeBranchesResponse {
    pub branches: Vec<HistoryBranchDetail>,
    pub next_page_token: Vec<u8>,
}

zero_value_via_default!(
    AppendHistoryNodesResponse,
    ReadHistoryBranchResponse,
    ReadHistoryBranchReverseResponse,
    ReadHistoryBranchByBatchResponse,
    ReadRawHistoryBranchResponse,
    ForkHistoryBranchResponse,
    TrimHistoryBranchResponse,
    GetHistoryTreeResponse,
    GetAllHistoryTreeBranchesResponse,
);
