use super::DataBlob;
use super::history::*;
use crate::core::{Context, Result, zero_value_via_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Workflow execution records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WorkflowKey {
    pub namespace_id: Uuid,
    pub workflow_id: String,
    pub run_id: Uuid,
}

impl WorkflowKey {
    pub fn new(namespace_id: Uuid, workflow_id: impl Into<String>, run_id: Uuid) -> Self {
        Self {
            namespace_id,
            workflow_id: workflow_id.into(),
            run_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkflowExecutionState {
    #[default]
    Unspecified,
    Created,
    Running,
    Completed,
    Zombie,
    Void,
    Corrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreateWorkflowMode {
    /// Fails if a current record exists
    BrandNew,
    /// Replaces the current record of a finished run
    UpdateCurrent,
    /// Leaves the current record alone
    BypassCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateWorkflowMode {
    UpdateCurrent,
    BypassCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictResolveWorkflowMode {
    UpdateCurrent,
    BypassCurrent,
}

/// Full mutable state of one run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowSnapshot {
    pub key: WorkflowKey,
    pub state: WorkflowExecutionState,
    pub next_event_id: i64,
    pub db_record_version: i64,
    pub execution_info: DataBlob,
    pub tasks: Vec<HistoryTask>,
}

/// Incremental changes to the mutable state of one run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowMutation {
    pub key: WorkflowKey,
    pub state: WorkflowExecutionState,
    pub next_event_id: i64,
    pub db_record_version: i64,
    pub condition: i64,
    pub upserts: DataBlob,
    pub tasks: Vec<HistoryTask>,
}

/// History events written together with a mutable state change
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowEvents {
    pub branch_token: Vec<u8>,
    pub prev_txn_id: i64,
    pub txn_id: i64,
    pub node_id: i64,
    pub events: Vec<DataBlob>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutableStateStatistics {
    pub total_size: usize,
    pub history_size: usize,
    pub history_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateWorkflowExecutionRequest {
    pub shard_id: i32,
    pub range_id: i64,
    pub mode: CreateWorkflowMode,
    pub previous_run_id: Option<Uuid>,
    pub previous_last_write_version: i64,
    pub new_workflow_snapshot: WorkflowSnapshot,
    pub new_workflow_events: Vec<WorkflowEvents>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateWorkflowExecutionResponse {
    pub new_mutable_state_stats: MutableStateStatistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetWorkflowExecutionRequest {
    pub shard_id: i32,
    pub key: WorkflowKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetWorkflowExecutionResponse {
    pub state: WorkflowSnapshot,
    pub db_record_version: i64,
    pub mutable_state_stats: MutableStateStatistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetWorkflowExecutionRequest {
    pub shard_id: i32,
    pub range_id: i64,
    pub set_workflow_snapshot: WorkflowSnapshot,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetWorkflowExecutionResponse {}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowExecutionRequest {
    pub shard_id: i32,
    pub range_id: i64,
    pub mode: UpdateWorkflowMode,
    pub update_workflow_mutation: WorkflowMutation,
    pub update_workflow_events: Vec<WorkflowEvents>,
    pub new_workflow_snapshot: Option<WorkflowSnapshot>,
    pub new_workflow_events: Vec<WorkflowEvents>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateWorkflowExecutionResponse {
    pub update_mutable_state_stats: MutableStateStatistics,
    pub new_mutable_state_stats: Option<MutableStateStatistics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConflictResolveWorkflowExecutionRequest {
    pub shard_id: i32,
    pub range_id: i64,
    pub mode: ConflictResolveWorkflowMode,
    pub reset_workflow_snapshot: WorkflowSnapshot,
    pub reset_workflow_events: Vec<WorkflowEvents>,
    pub new_workflow_snapshot: Option<WorkflowSnapshot>,
    pub new_workflow_events: Vec<WorkflowEvents>,
    pub current_workflow_mutation: Option<WorkflowMutation>,
    pub current_workflow_events: Vec<WorkflowEvents>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConflictResolveWorkflowExecutionResponse {
    pub reset_mutable_state_stats: MutableStateStatistics,
    pub new_mutable_state_stats: Option<MutableStateStatistics>,
    pub current_mutable_state_stats: Option<MutableStateStatistics>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteWorkflowExecutionRequest {
    pub shard_id: i32,
    pub key: WorkflowKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCurrentWorkflowExecutionRequest {
    pub shard_id: i32,
    pub key: WorkflowKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetCurrentExecutionRequest {
    pub shard_id: i32,
    pub namespace_id: Uuid,
    pub workflow_id: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetCurrentExecutionResponse {
    pub start_request_id: String,
    pub run_id: Uuid,
    pub state: WorkflowExecutionState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListConcreteExecutionsRequest {
    pub shard_id: i32,
    pub page_size: usize,
    pub page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListConcreteExecutionsResponse {
    pub states: Vec<WorkflowSnapshot>,
    pub page_token: Vec<u8>,
}

// ============================================================================
// History tasks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    Transfer,
    Timer,
    Replication,
    Visibility,
}

/// Position of a history task within its category queue
///
/// Immediate categories order by `task_id` only; scheduled ones order by
/// `fire_time` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TaskKey {
    pub fire_time: Option<DateTime<Utc>>,
    pub task_id: i64,
}

impl TaskKey {
    pub fn immediate(task_id: i64) -> Self {
        Self {
            fire_time: None,
            task_id,
        }
    }

    pub fn scheduled(fire_time: DateTime<Utc>, task_id: i64) -> Self {
        Self {
            fire_time: Some(fire_time),
            task_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryTask {
    pub category: TaskCategory,
    pub key: TaskKey,
    pub workflow_key: WorkflowKey,
    pub blob: DataBlob,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddHistoryTasksRequest {
    pub shard_id: i32,
    pub range_id: i64,
    pub key: WorkflowKey,
    pub tasks: Vec<HistoryTask>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetHistoryTaskRequest {
    pub shard_id: i32,
    pub category: TaskCategory,
    pub task_key: TaskKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetHistoryTaskResponse {
    pub task: HistoryTask,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetHistoryTasksRequest {
    pub shard_id: i32,
    pub category: TaskCategory,
    pub inclusive_min_task_key: TaskKey,
    pub exclusive_max_task_key: TaskKey,
    pub batch_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetHistoryTasksResponse {
    pub tasks: Vec<HistoryTask>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteHistoryTaskRequest {
    pub shard_id: i32,
    pub category: TaskCategory,
    pub task_key: TaskKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeCompleteHistoryTasksRequest {
    pub shard_id: i32,
    pub category: TaskCategory,
    pub inclusive_min_task_key: TaskKey,
    pub exclusive_max_task_key: TaskKey,
}

// ============================================================================
// Replication DLQ
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PutReplicationTaskToDLQRequest {
    pub shard_id: i32,
    pub source_cluster_name: String,
    pub task_info: HistoryTask,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetReplicationTasksFromDLQRequest {
    pub source_cluster_name: String,
    pub tasks: GetHistoryTasksRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteReplicationTaskFromDLQRequest {
    pub source_cluster_name: String,
    pub task: CompleteHistoryTaskRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeDeleteReplicationTaskFromDLQRequest {
    pub source_cluster_name: String,
    pub tasks: RangeCompleteHistoryTasksRequest,
}

zero_value_via_default!(
    CreateWorkflowExecutionResponse,
    GetWorkflowExecutionResponse,
    SetWorkflowExecutionResponse,
    UpdateWorkflowExecutionResponse,
    ConflictResolveWorkflowExecutionResponse,
    GetCurrentExecutionResponse,
    ListConcreteExecutionsResponse,
    GetHistoryTaskResponse,
    GetHistoryTasksResponse,
);

// ============================================================================
// ExecutionManager
// ============================================================================

/// Workflow execution, history task and history tree storage
///
/// Every data call carries a [`Context`]; honoring its cancellation and
/// deadline is up to the implementation.
pub trait ExecutionManager: Send + Sync {
    fn get_name(&self) -> &str;

    fn create_workflow_execution(
        &self,
        ctx: &Context,
        request: &CreateWorkflowExecutionRequest,
    ) -> Result<CreateWorkflowExecutionResponse>;

    fn get_workflow_execution(
        &self,
        ctx: &Context,
        request: &GetWorkflowExecutionRequest,
    ) -> Result<GetWorkflowExecutionResponse>;

    fn set_workflow_execution(
        &self,
        ctx: &Context,
        request: &SetWorkflowExecutionRequest,
    ) -> Result<SetWorkflowExecutionResponse>;

    fn update_workflow_execution(
        &self,
        ctx: &Context,
        request: &UpdateWorkflowExecutionRequest,
    ) -> Result<UpdateWorkflowExecutionResponse>;

    fn conflict_resolve_workflow_execution(
        &self,
        ctx: &Context,
        request: &ConflictResolveWorkflowExecutionRequest,
    ) -> Result<ConflictResolveWorkflowExecutionResponse>;

    fn delete_workflow_execution(
        &self,
        ctx: &Context,
        request: &DeleteWorkflowExecutionRequest,
    ) -> Result<()>;

    fn delete_current_workflow_execution(
        &self,
        ctx: &Context,
        request: &DeleteCurrentWorkflowExecutionRequest,
    ) -> Result<()>;

    fn get_current_execution(
        &self,
        ctx: &Context,
        request: &GetCurrentExecutionRequest,
    ) -> Result<GetCurrentExecutionResponse>;

    fn list_concrete_executions(
        &self,
        ctx: &Context,
        request: &ListConcreteExecutionsRequest,
    ) -> Result<ListConcreteExecutionsResponse>;

    // Tasks related APIs

    fn add_history_tasks(&self, ctx: &Context, request: &AddHistoryTasksRequest) -> Result<()>;

    fn get_history_task(
        &self,
        ctx: &Context,
        request: &GetHistoryTaskRequest,
    ) -> Result<GetHistoryTaskResponse>;

    fn get_history_tasks(
        &self,
        ctx: &Context,
        request: &GetHistoryTasksRequest,
    ) -> Result<GetHistoryTasksResponse>;

    fn complete_history_task(
        &self,
        ctx: &Context,
        request: &CompleteHistoryTaskRequest,
    ) -> Result<()>;

    fn range_complete_history_tasks(
        &self,
        ctx: &Context,
        request: &RangeCompleteHistoryTasksRequest,
    ) -> Result<()>;

    fn put_replication_task_to_dlq(
        &self,
        ctx: &Context,
        request: &PutReplicationTaskToDLQRequest,
    ) -> Result<()>;

    fn get_replication_tasks_from_dlq(
        &self,
        ctx: &Context,
        request: &GetReplicationTasksFromDLQRequest,
    ) -> Result<GetHistoryTasksResponse>;

    fn delete_replication_task_from_dlq(
        &self,
        ctx: &Context,
        request: &DeleteReplicationTaskFromDLQRequest,
    ) -> Result<()>;

    fn range_delete_replication_task_from_dlq(
        &self,
        ctx: &Context,
        request: &RangeDeleteReplicationTaskFromDLQRequest,
    ) -> Result<()>;

    // History tree APIs

    /// Appends a batch of history nodes to a branch
    fn append_history_nodes(
        &self,
        ctx: &Context,
        request: &AppendHistoryNodesRequest,
    ) -> Result<AppendHistoryNodesResponse>;

    /// Reads a branch in event order
    fn read_history_branch(
        &self,
        ctx: &Context,
        request: &ReadHistoryBranchRequest,
    ) -> Result<ReadHistoryBranchResponse>;

    /// Reads a branch from the newest event backwards
    fn read_history_branch_reverse(
        &self,
        ctx: &Context,
        request: &ReadHistoryBranchReverseRequest,
    ) -> Result<ReadHistoryBranchReverseResponse>;

    /// Reads a branch grouped by the batches it was appended in
    fn read_history_branch_by_batch(
        &self,
        ctx: &Context,
        request: &ReadHistoryBranchRequest,
    ) -> Result<ReadHistoryBranchByBatchResponse>;

    /// Reads a branch without decoding the stored blobs
    fn read_raw_history_branch(
        &self,
        ctx: &Context,
        request: &ReadHistoryBranchRequest,
    ) -> Result<ReadRawHistoryBranchResponse>;

    fn fork_history_branch(
        &self,
        ctx: &Context,
        request: &ForkHistoryBranchRequest,
    ) -> Result<ForkHistoryBranchResponse>;

    fn delete_history_branch(
        &self,
        ctx: &Context,
        request: &DeleteHistoryBranchRequest,
    ) -> Result<()>;

    /// Drops nodes past the given node/transaction pair
    fn trim_history_branch(
        &self,
        ctx: &Context,
        request: &TrimHistoryBranchRequest,
    ) -> Result<TrimHistoryBranchResponse>;

    fn get_history_tree(
        &self,
        ctx: &Context,
        request: &GetHistoryTreeRequest,
    ) -> Result<GetHistoryTreeResponse>;

    fn get_all_history_tree_branches(
        &self,
        ctx: &Context,
        request: &GetAllHistoryTreeBranchesRequest,
    ) -> Result<GetAllHistoryTreeBranchesResponse>;

    fn close(&self);
}
