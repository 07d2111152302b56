use super::{RateLimitedClient, rate_limited};
use crate::persistence::*;

impl<P: TaskManager + ?Sized> TaskManager for RateLimitedClient<P> {
    fn get_name(&self) -> &str {
        self.persistence.get_name()
    }

    rate_limited! {
        "task";
        fn create_tasks(&self, request: &CreateTasksRequest) -> CreateTasksResponse;
        fn get_tasks(&self, request: &GetTasksRequest) -> GetTasksResponse;
        fn complete_task(&self, request: &CompleteTaskRequest) -> ();
        fn complete_tasks_less_than(&self, request: &CompleteTasksLessThanRequest) -> usize;
        fn create_task_queue(&self, request: &CreateTaskQueueRequest) -> CreateTaskQueueResponse;
        fn update_task_queue(&self, request: &UpdateTaskQueueRequest) -> UpdateTaskQueueResponse;
        fn get_task_queue(&self, request: &GetTaskQueueRequest) -> GetTaskQueueResponse;
        fn list_task_queue(&self, request: &ListTaskQueueRequest) -> ListTaskQueueResponse;
        fn delete_task_queue(&self, request: &DeleteTaskQueueRequest) -> ();
    }

    fn close(&self) {
        self.persistence.close();
    }
}
