//! Sample requests for every persistence call

use chrono::{TimeZone, Utc};
use ratelimited_persistence::persistence::*;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use uuid::Uuid;

pub const SHARD_ID: i32 = 7;

pub fn namespace_id() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, b"orders")
}

pub fn workflow_key() -> WorkflowKey {
    WorkflowKey::new(
        namespace_id(),
        "order-1042",
        Uuid::new_v5(&Uuid::NAMESPACE_OID, b"order-1042/run-1"),
    )
}

pub fn snapshot() -> WorkflowSnapshot {
    WorkflowSnapshot {
        key: workflow_key(),
        state: WorkflowExecutionState::Created,
        next_event_id: 3,
        db_record_version: 1,
        execution_info: DataBlob::proto3(b"execution-info".to_vec()),
        tasks: Vec::new(),
    }
}

pub fn events() -> WorkflowEvents {
    WorkflowEvents {
        branch_token: b"branch-1".to_vec(),
        prev_txn_id: 0,
        txn_id: 1,
        node_id: 1,
        events: vec![DataBlob::proto3(b"started".to_vec())],
    }
}

pub fn task_queue() -> TaskQueueKey {
    TaskQueueKey {
        namespace_id: namespace_id(),
        name: "billing".into(),
        task_type: TaskQueueType::Activity,
    }
}

// ============================================================================
// Shard
// ============================================================================

pub fn get_or_create_shard() -> GetOrCreateShardRequest {
    GetOrCreateShardRequest {
        shard_id: SHARD_ID,
        initial_shard_info: None,
    }
}

pub fn update_shard() -> UpdateShardRequest {
    UpdateShardRequest {
        shard_info: ShardInfo {
            shard_id: SHARD_ID,
            owner: "host-a".into(),
            range_id: 2,
            ..Default::default()
        },
        previous_range_id: 1,
    }
}

// ============================================================================
// Execution
// ============================================================================

pub fn create_workflow_execution() -> CreateWorkflowExecutionRequest {
    CreateWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        range_id: 1,
        mode: CreateWorkflowMode::BrandNew,
        previous_run_id: None,
        previous_last_write_version: 0,
        new_workflow_snapshot: snapshot(),
        new_workflow_events: vec![events()],
    }
}

pub fn get_workflow_execution() -> GetWorkflowExecutionRequest {
    GetWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        key: workflow_key(),
    }
}

pub fn set_workflow_execution() -> SetWorkflowExecutionRequest {
    SetWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        range_id: 1,
        set_workflow_snapshot: snapshot(),
    }
}

pub fn update_workflow_execution() -> UpdateWorkflowExecutionRequest {
    UpdateWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        range_id: 1,
        mode: UpdateWorkflowMode::UpdateCurrent,
        update_workflow_mutation: WorkflowMutation {
            key: workflow_key(),
            state: WorkflowExecutionState::Running,
            next_event_id: 5,
            db_record_version: 2,
            condition: 3,
            upserts: DataBlob::proto3(b"activity-info".to_vec()),
            tasks: Vec::new(),
        },
        update_workflow_events: vec![events()],
        new_workflow_snapshot: None,
        new_workflow_events: Vec::new(),
    }
}

pub fn conflict_resolve_workflow_execution() -> ConflictResolveWorkflowExecutionRequest {
    ConflictResolveWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        range_id: 1,
        mode: ConflictResolveWorkflowMode::BypassCurrent,
        reset_workflow_snapshot: snapshot(),
        reset_workflow_events: Vec::new(),
        new_workflow_snapshot: None,
        new_workflow_events: Vec::new(),
        current_workflow_mutation: None,
        current_workflow_events: Vec::new(),
    }
}

pub fn delete_workflow_execution() -> DeleteWorkflowExecutionRequest {
    DeleteWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        key: workflow_key(),
    }
}

pub fn delete_current_workflow_execution() -> DeleteCurrentWorkflowExecutionRequest {
    DeleteCurrentWorkflowExecutionRequest {
        shard_id: SHARD_ID,
        key: workflow_key(),
    }
}

pub fn get_current_execution() -> GetCurrentExecutionRequest {
    GetCurrentExecutionRequest {
        shard_id: SHARD_ID,
        namespace_id: namespace_id(),
        workflow_id: "order-1042".into(),
    }
}

pub fn list_concrete_executions() -> ListConcreteExecutionsRequest {
    ListConcreteExecutionsRequest {
        shard_id: SHARD_ID,
        page_size: 10,
        page_token: Vec::new(),
    }
}

pub fn add_history_tasks() -> AddHistoryTasksRequest {
    AddHistoryTasksRequest {
        shard_id: SHARD_ID,
        range_id: 1,
        key: workflow_key(),
        tasks: vec![HistoryTask {
            category: TaskCategory::Transfer,
            key: TaskKey::immediate(100),
            workflow_key: workflow_key(),
            blob: DataBlob::proto3(b"activity-task".to_vec()),
        }],
    }
}

pub fn get_history_task() -> GetHistoryTaskRequest {
    GetHistoryTaskRequest {
        shard_id: SHARD_ID,
        category: TaskCategory::Timer,
        task_key: TaskKey::scheduled(Utc.timestamp_opt(1_700_000_060, 0).unwrap(), 101),
    }
}

pub fn get_history_tasks() -> GetHistoryTasksRequest {
    GetHistoryTasksRequest {
        shard_id: SHARD_ID,
        category: TaskCategory::Transfer,
        inclusive_min_task_key: TaskKey::immediate(100),
        exclusive_max_task_key: TaskKey::immediate(200),
        batch_size: 16,
        next_page_token: Vec::new(),
    }
}

pub fn complete_history_task() -> CompleteHistoryTaskRequest {
    CompleteHistoryTaskRequest {
        shard_id: SHARD_ID,
        category: TaskCategory::Transfer,
        task_key: TaskKey::immediate(100),
    }
}

pub fn range_complete_history_tasks() -> RangeCompleteHistoryTasksRequest {
    RangeCompleteHistoryTasksRequest {
        shard_id: SHARD_ID,
        category: TaskCategory::Visibility,
        inclusive_min_task_key: TaskKey::immediate(0),
        exclusive_max_task_key: TaskKey::immediate(100),
    }
}

pub fn put_replication_task_to_dlq() -> PutReplicationTaskToDLQRequest {
    PutReplicationTaskToDLQRequest {
        shard_id: SHARD_ID,
        source_cluster_name: "standby".into(),
        task_info: HistoryTask {
            category: TaskCategory::Replication,
            key: TaskKey::immediate(300),
            workflow_key: workflow_key(),
            blob: DataBlob::proto3(b"replication-task".to_vec()),
        },
    }
}

pub fn get_replication_tasks_from_dlq() -> GetReplicationTasksFromDLQRequest {
    let mut tasks = get_history_tasks();
    tasks.category = TaskCategory::Replication;
    GetReplicationTasksFromDLQRequest {
        source_cluster_name: "standby".into(),
        tasks,
    }
}

pub fn delete_replication_task_from_dlq() -> DeleteReplicationTaskFromDLQRequest {
    DeleteReplicationTaskFromDLQRequest {
        source_cluster_name: "standby".into(),
        task: complete_history_task(),
    }
}

pub fn range_delete_replication_task_from_dlq() -> RangeDeleteReplicationTaskFromDLQRequest {
    RangeDeleteReplicationTaskFromDLQRequest {
        source_cluster_name: "standby".into(),
        tasks: range_complete_history_tasks(),
    }
}

pub fn append_history_nodes() -> AppendHistoryNodesRequest {
    AppendHistoryNodesRequest {
        shard_id: SHARD_ID,
        is_new_branch: true,
        info: "order-1042".into(),
        branch_token: b"branch-1".to_vec(),
        events: vec![
            DataBlob::proto3(b"started".to_vec()),
            DataBlob::proto3(b"scheduled".to_vec()),
        ],
        prev_transaction_id: 0,
        transaction_id: 1,
        node_id: 1,
    }
}

pub fn read_history_branch() -> ReadHistoryBranchRequest {
    ReadHistoryBranchRequest {
        shard_id: SHARD_ID,
        branch_token: b"branch-1".to_vec(),
        min_event_id: 1,
        max_event_id: 4,
        page_size: 50,
        next_page_token: Vec::new(),
    }
}

pub fn read_history_branch_reverse() -> ReadHistoryBranchReverseRequest {
    ReadHistoryBranchReverseRequest {
        shard_id: SHARD_ID,
        branch_token: b"branch-1".to_vec(),
        max_event_id: 4,
        last_first_transaction_id: 1,
        page_size: 50,
        next_page_token: Vec::new(),
    }
}

pub fn fork_history_branch() -> ForkHistoryBranchRequest {
    ForkHistoryBranchRequest {
        shard_id: SHARD_ID,
        namespace_id: namespace_id(),
        fork_branch_token: b"branch-1".to_vec(),
        fork_node_id: 3,
        info: "reset".into(),
        new_run_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"order-1042/run-2"),
    }
}

pub fn delete_history_branch() -> DeleteHistoryBranchRequest {
    DeleteHistoryBranchRequest {
        shard_id: SHARD_ID,
        branch_token: b"branch-1".to_vec(),
    }
}

pub fn trim_history_branch() -> TrimHistoryBranchRequest {
    TrimHistoryBranchRequest {
        shard_id: SHARD_ID,
        branch_token: b"branch-1".to_vec(),
        node_id: 3,
        transaction_id: 2,
    }
}

pub fn get_history_tree() -> GetHistoryTreeRequest {
    GetHistoryTreeRequest {
        shard_id: SHARD_ID,
        tree_id: workflow_key().run_id,
    }
}

pub fn get_all_history_tree_branches() -> GetAllHistoryTreeBranchesRequest {
    GetAllHistoryTreeBranchesRequest {
        page_size: 20,
        next_page_token: Vec::new(),
    }
}

// ============================================================================
// Task
// ============================================================================

pub fn create_tasks() -> CreateTasksRequest {
    CreateTasksRequest {
        task_queue_info: PersistedTaskQueueInfo {
            data: TaskQueueInfo {
                key: task_queue(),
                kind: TaskQueueKind::Normal,
                ..Default::default()
            },
            range_id: 1,
        },
        tasks: vec![TaskInfo {
            task_id: 1,
            data: DataBlob::proto3(b"charge-card".to_vec()),
        }],
    }
}

pub fn get_tasks() -> GetTasksRequest {
    GetTasksRequest {
        task_queue: task_queue(),
        inclusive_min_task_id: 1,
        exclusive_max_task_id: 4,
        page_size: 100,
        next_page_token: Vec::new(),
    }
}

pub fn complete_task() -> CompleteTaskRequest {
    CompleteTaskRequest {
        task_queue: task_queue(),
        task_id: 1,
    }
}

pub fn complete_tasks_less_than() -> CompleteTasksLessThanRequest {
    CompleteTasksLessThanRequest {
        task_queue: task_queue(),
        exclusive_max_task_id: 40,
        limit: 25,
    }
}

pub fn create_task_queue() -> CreateTaskQueueRequest {
    CreateTaskQueueRequest {
        range_id: 1,
        task_queue_info: TaskQueueInfo {
            key: task_queue(),
            kind: TaskQueueKind::Normal,
            ..Default::default()
        },
    }
}

pub fn update_task_queue() -> UpdateTaskQueueRequest {
    UpdateTaskQueueRequest {
        range_id: 2,
        prev_range_id: 1,
        task_queue_info: TaskQueueInfo {
            key: task_queue(),
            kind: TaskQueueKind::Normal,
            ack_level: 10,
            ..Default::default()
        },
    }
}

pub fn get_task_queue() -> GetTaskQueueRequest {
    GetTaskQueueRequest {
        task_queue: task_queue(),
    }
}

pub fn list_task_queue() -> ListTaskQueueRequest {
    ListTaskQueueRequest {
        page_size: 5,
        page_token: Vec::new(),
    }
}

pub fn delete_task_queue() -> DeleteTaskQueueRequest {
    DeleteTaskQueueRequest {
        task_queue: task_queue(),
        range_id: 2,
    }
}

// ============================================================================
// Metadata
// ============================================================================

pub fn namespace() -> NamespaceDetail {
    NamespaceDetail {
        info: NamespaceInfo {
            id: namespace_id(),
            name: "orders".into(),
            state: NamespaceState::Registered,
            description: "order processing".into(),
            owner_email: "orders@example.com".into(),
        },
        config: NamespaceConfig {
            retention: Duration::from_secs(3 * 24 * 3600),
            ..Default::default()
        },
        replication_config: NamespaceReplicationConfig {
            active_cluster_name: "active".into(),
            clusters: vec!["active".into()],
        },
        config_version: 0,
        failover_version: 0,
    }
}

pub fn create_namespace() -> CreateNamespaceRequest {
    CreateNamespaceRequest {
        namespace: namespace(),
        is_global_namespace: false,
    }
}

pub fn get_namespace() -> GetNamespaceRequest {
    GetNamespaceRequest::by_name("orders")
}

pub fn update_namespace() -> UpdateNamespaceRequest {
    UpdateNamespaceRequest {
        namespace: namespace(),
        is_global_namespace: false,
        notification_version: 11,
    }
}

pub fn rename_namespace() -> RenameNamespaceRequest {
    RenameNamespaceRequest {
        previous_name: "orders".into(),
        new_name: "orders-v2".into(),
    }
}

pub fn delete_namespace() -> DeleteNamespaceRequest {
    DeleteNamespaceRequest { id: namespace_id() }
}

pub fn delete_namespace_by_name() -> DeleteNamespaceByNameRequest {
    DeleteNamespaceByNameRequest {
        name: "orders".into(),
    }
}

pub fn list_namespaces() -> ListNamespacesRequest {
    ListNamespacesRequest {
        page_size: 10,
        next_page_token: Vec::new(),
        include_deleted: false,
    }
}

// ============================================================================
// Cluster metadata
// ============================================================================

pub fn get_cluster_members() -> GetClusterMembersRequest {
    GetClusterMembersRequest {
        role_equals: Some(ServiceRole::History),
        page_size: 50,
        ..Default::default()
    }
}

pub fn upsert_cluster_membership() -> UpsertClusterMembershipRequest {
    UpsertClusterMembershipRequest {
        role: ServiceRole::History,
        host_id: Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"host-a"),
        rpc_address: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)),
        rpc_port: 7234,
        session_start: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        record_expiry: Duration::from_secs(48 * 3600),
    }
}

pub fn prune_cluster_membership() -> PruneClusterMembershipRequest {
    PruneClusterMembershipRequest {
        max_records_pruned: 100,
    }
}

pub fn list_cluster_metadata() -> ListClusterMetadataRequest {
    ListClusterMetadataRequest {
        page_size: 10,
        next_page_token: Vec::new(),
    }
}

pub fn get_cluster_metadata() -> GetClusterMetadataRequest {
    GetClusterMetadataRequest {
        cluster_name: "standby".into(),
    }
}

pub fn save_cluster_metadata() -> SaveClusterMetadataRequest {
    SaveClusterMetadataRequest {
        cluster_metadata: ClusterMetadata {
            cluster_name: "active".into(),
            history_shard_count: 4,
            ..Default::default()
        },
        version: 0,
    }
}

pub fn delete_cluster_metadata() -> DeleteClusterMetadataRequest {
    DeleteClusterMetadataRequest {
        cluster_name: "standby".into(),
    }
}

// ============================================================================
// Queue
// ============================================================================

pub fn message() -> DataBlob {
    DataBlob::proto3(b"namespace-replication".to_vec())
}

pub fn ack_levels() -> QueueMetadata {
    QueueMetadata {
        blob: DataBlob::proto3(b"cluster-ack-levels".to_vec()),
        version: 3,
    }
}
