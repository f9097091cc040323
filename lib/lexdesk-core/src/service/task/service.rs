use serde_json::Value;

use super::TaskService;
use crate::proto::session::Session;
use crate::provider::task::provider::ScheduledTask;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl TaskService {
    /// Runs a configured task on demand, super-admin only
    ///
    /// # Arguments
    ///
    /// * `name` - task name from the `task` config section
    /// * `session` - acting admin
    pub async fn run_task(&self, name: &str, session: &Session) -> Result<Value, ServiceError> {
        session.ensure_super_admin()?;

        tracing::info!(task = name, actor = %session.admin_id, "Running task on demand");
        self.run_scheduled_task(name).await
    }

    /// Runs a configured task on behalf of the scheduler
    pub async fn run_scheduled_task(&self, name: &str) -> Result<Value, ServiceError> {
        let task = self
            .task_provider
            .get_task(name)
            .ok_or_else(|| EntityNotFoundError::Task(name.to_owned()))?;

        let result = task.run().await?;
        tracing::debug!(task = name, %result, "Task finished");

        Ok(result)
    }

    pub fn scheduled_tasks(&self) -> Vec<ScheduledTask> {
        self.task_provider.scheduled_tasks()
    }
}
