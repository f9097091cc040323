use std::sync::Arc;

use serde_json::json;
use shared_types::AdminId;

use super::TaskService;
use crate::provider::task::{MockTask, Task};
use crate::provider::task::provider::MockTaskProvider;
use crate::service::error::{EntityNotFoundError, ErrorKind, ServiceError};
use crate::service::test_utilities::{advocate_session, super_admin_session};

#[tokio::test]
async fn test_run_task() {
    let mut task = MockTask::default();
    task.expect_run()
        .once()
        .returning(|| Ok(json!({ "expired": 3 })));
    let task: Arc<dyn Task> = Arc::new(task);

    let mut provider = MockTaskProvider::default();
    provider
        .expect_get_task()
        .withf(|name| name == "EXPIRE_ACCESS_LINKS")
        .returning(move |_| Some(task.clone()));

    let service = TaskService::new(Arc::new(provider));
    let result = service
        .run_task("EXPIRE_ACCESS_LINKS", &super_admin_session())
        .await
        .unwrap();

    assert_eq!(result, json!({ "expired": 3 }));
}

#[tokio::test]
async fn test_run_unknown_task() {
    let mut provider = MockTaskProvider::default();
    provider.expect_get_task().returning(|_| None);

    let service = TaskService::new(Arc::new(provider));
    let result = service
        .run_task("NOT_CONFIGURED", &super_admin_session())
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Task(name))) if name == "NOT_CONFIGURED"
    ));
}

#[tokio::test]
async fn test_run_task_requires_super_admin() {
    let service = TaskService::new(Arc::new(MockTaskProvider::default()));

    let result = service
        .run_task("EXPIRE_ACCESS_LINKS", &advocate_session(AdminId::new_v4()))
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Forbidden);
}
