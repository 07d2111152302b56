use super::DataBlob;
use crate::core::{Result, zero_value_via_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskQueueType {
    #[default]
    Unspecified,
    Workflow,
    Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskQueueKind {
    #[default]
    Unspecified,
    Normal,
    Sticky,
}

/// Identifies one task queue partition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TaskQueueKey {
    pub namespace_id: Uuid,
    pub name: String,
    pub task_type: TaskQueueType,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskQueueInfo {
    pub key: TaskQueueKey,
    pub kind: TaskQueueKind,
    pub ack_level: i64,
    pub expiry_time: Option<DateTime<Utc>>,
    pub last_update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedTaskQueueInfo {
    pub data: TaskQueueInfo,
    pub range_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskInfo {
    pub task_id: i64,
    pub data: DataBlob,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTasksRequest {
    pub task_queue_info: PersistedTaskQueueInfo,
    pub tasks: Vec<TaskInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTasksResponse {}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTasksRequest {
    pub task_queue: TaskQueueKey,
    pub inclusive_min_task_id: i64,
    pub exclusive_max_task_id: i64,
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTasksResponse {
    pub tasks: Vec<TaskInfo>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteTaskRequest {
    pub task_queue: TaskQueueKey,
    pub task_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteTasksLessThanRequest {
    pub task_queue: TaskQueueKey,
    pub exclusive_max_task_id: i64,
    /// Upper bound on the number of tasks removed in one call
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskQueueRequest {
    pub range_id: i64,
    pub task_queue_info: TaskQueueInfo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTaskQueueResponse {}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskQueueRequest {
    pub range_id: i64,
    pub prev_range_id: i64,
    pub task_queue_info: TaskQueueInfo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTaskQueueResponse {}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTaskQueueRequest {
    pub task_queue: TaskQueueKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetTaskQueueResponse {
    pub range_id: i64,
    pub task_queue_info: TaskQueueInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListTaskQueueRequest {
    pub page_size: usize,
    pub page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTaskQueueResponse {
    pub items: Vec<PersistedTaskQueueInfo>,
    pub next_page_token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTaskQueueRequest {
    pub task_queue: TaskQueueKey,
    pub range_id: i64,
}

zero_value_via_default!(
    CreateTasksResponse,
    GetTasksResponse,
    CreateTaskQueueResponse,
    UpdateTaskQueueResponse,
    GetTaskQueueResponse,
    ListTaskQueueResponse,
);

/// Matching tasks and task queue records
pub trait TaskManager: Send + Sync {
    fn get_name(&self) -> &str;

    fn create_tasks(&self, request: &CreateTasksRequest) -> Result<CreateTasksResponse>;

    fn get_tasks(&self, request: &GetTasksRequest) -> Result<GetTasksResponse>;

    fn complete_task(&self, request: &CompleteTaskRequest) -> Result<()>;

    /// Deletes tasks below `exclusive_max_task_id`, returning how many were removed
    fn complete_tasks_less_than(&self, request: &CompleteTasksLessThanRequest) -> Result<usize>;

    fn create_task_queue(
        &self,
        request: &CreateTaskQueueRequest,
    ) -> Result<CreateTaskQueueResponse>;

    fn update_task_queue(
        &self,
        request: &UpdateTaskQueueRequest,
    ) -> Result<UpdateTaskQueueResponse>;

    fn get_task_queue(&self, request: &GetTaskQueueRequest) -> Result<GetTaskQueueResponse>;

    fn list_task_queue(&self, request: &ListTaskQueueRequest) -> Result<ListTaskQueueResponse>;

    fn delete_task_queue(&self, request: &DeleteTaskQueueRequest) -> Result<()>;

    fn close(&self);
}
