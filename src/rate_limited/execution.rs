use super::{RateLimitedClient, rate_limited};
use crate::core::Context;
use crate::persistence::*;

// The limiter is consulted before anything else, even for an already
// cancelled `ctx`; the context is handed to the wrapped store untouched.
impl<P: ExecutionManager + ?Sized> ExecutionManager for RateLimitedClient<P> {
    fn get_name(&self) -> &str {
        self.persistence.get_name()
    }

    rate_limited! {
        "execution";
        fn create_workflow_execution(
            &self,
            ctx: &Context,
            request: &CreateWorkflowExecutionRequest
        ) -> CreateWorkflowExecutionResponse;
        fn get_workflow_execution(
            &self,
            ctx: &Context,
            request: &GetWorkflowExecutionRequest
        ) -> GetWorkflowExecutionResponse;
        fn set_workflow_execution(
            &self,
            ctx: &Context,
            request: &SetWorkflowExecutionRequest
        ) -> SetWorkflowExecutionResponse;
        fn update_workflow_execution(
            &self,
            ctx: &Context,
            request: &UpdateWorkflowExecutionRequest
        ) -> UpdateWorkflowExecutionResponse;
        fn conflict_resolve_workflow_execution(
            &self,
            ctx: &Context,
            request: &ConflictResolveWorkflowExecutionRequest
        ) -> ConflictResolveWorkflowExecutionResponse;
        fn delete_workflow_execution(
            &self,
            ctx: &Context,
            request: &DeleteWorkflowExecutionRequest
        ) -> ();
        fn delete_current_workflow_execution(
            &self,
            ctx: &Context,
            request: &DeleteCurrentWorkflowExecutionRequest
        ) -> ();
        fn get_current_execution(
            &self,
            ctx: &Context,
            request: &GetCurrentExecutionRequest
        ) -> GetCurrentExecutionResponse;
        fn list_concrete_executions(
            &self,
            ctx: &Context,
            request: &ListConcreteExecutionsRequest
        ) -> ListConcreteExecutionsResponse;
    }

    rate_limited! {
        "execution";
        fn add_history_tasks(&self, ctx: &Context, request: &AddHistoryTasksRequest) -> ();
        fn get_history_task(&self, ctx: &Context, request: &GetHistoryTaskRequest) -> GetHistoryTaskResponse;
        fn get_history_tasks(&self, ctx: &Context, request: &GetHistoryTasksRequest) -> GetHistoryTasksResponse;
        fn complete_history_task(&self, ctx: &Context, request: &CompleteHistoryTaskRequest) -> ();
        fn range_complete_history_tasks(
            &self,
            ctx: &Context,
            request: &RangeCompleteHistoryTasksRequest
        ) -> ();
        fn put_replication_task_to_dlq(
            &self,
            ctx: &Context,
            request: &PutReplicationTaskToDLQRequest
        ) -> ();
        fn get_replication_tasks_from_dlq(
            &self,
            ctx: &Context,
            request: &GetReplicationTasksFromDLQRequest
        ) -> GetHistoryTasksResponse;
        fn delete_replication_task_from_dlq(
            &self,
            ctx: &Context,
            request: &DeleteReplicationTaskFromDLQRequest
        ) -> ();
        fn range_delete_replication_task_from_dlq(
            &self,
            ctx: &Context,
            request: &RangeDeleteReplicationTaskFromDLQRequest
        ) -> ();
    }

    rate_limited! {
        "execution";
        fn append_history_nodes(
            &self,
            ctx: &Context,
            request: &AppendHistoryNodesRequest
        ) -> AppendHistoryNodesResponse;
        fn read_history_branch(
            &self,
            ctx: &Context,
            request: &ReadHistoryBranchRequest
        ) -> ReadHistoryBranchResponse;
        fn read_history_branch_reverse(
            &self,
            ctx: &Context,
            request: &ReadHistoryBranchReverseRequest
        ) -> ReadHistoryBranchReverseResponse;
        fn read_history_branch_by_batch(
            &self,
            ctx: &Context,
            request: &ReadHistoryBranchRequest
        ) -> ReadHistoryBranchByBatchResponse;
        fn read_raw_history_branch(
            &self,
            ctx: &Context,
            request: &ReadHistoryBranchRequest
        ) -> ReadRawHistoryBranchResponse;
        fn fork_history_branch(
            &self,
            ctx: &Context,
            request: &ForkHistoryBranchRequest
        ) -> ForkHistoryBranchResponse;
        fn delete_history_branch(&self, ctx: &Context, request: &DeleteHistoryBranchRequest) -> ();
        fn trim_history_branch(
            &self,
            ctx: &Context,
            request: &TrimHistoryBranchRequest
        ) -> TrimHistoryBranchResponse;
        fn get_history_tree(&self, ctx: &Context, request: &GetHistoryTreeRequest) -> GetHistoryTreeResponse;
        fn get_all_history_tree_branches(
            &self,
            ctx: &Context,
            request: &GetAllHistoryTreeBranchesRequest
        ) -> GetAllHistoryTreeBranchesResponse;
    }

    fn close(&self) {
        self.persistence.close();
    }
}
