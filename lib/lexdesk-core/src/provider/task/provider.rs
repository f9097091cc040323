use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::Task;
use crate::config::core_config::TaskConfig;

/// Task that the server runs periodically
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub name: String,
    pub interval: Duration,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TaskProvider: Send + Sync {
    fn get_task(&self, name: &str) -> Option<Arc<dyn Task>>;

    /// Enabled tasks with a configured interval, ordered by name
    fn scheduled_tasks(&self) -> Vec<ScheduledTask>;
}

pub(crate) struct TaskProviderImpl {
    tasks: HashMap<String, Arc<dyn Task>>,
    schedule: Vec<ScheduledTask>,
}

impl TaskProviderImpl {
    pub(crate) fn new(tasks: HashMap<String, Arc<dyn Task>>, config: &TaskConfig) -> Self {
        let schedule = config
            .iter()
            .filter(|(name, _)| tasks.contains_key(*name))
            .filter_map(|(name, fields)| {
                fields.interval.map(|interval| ScheduledTask {
                    name: name.to_owned(),
                    interval,
                })
            })
            .collect();

        Self { tasks, schedule }
    }
}

impl TaskProvider for TaskProviderImpl {
    fn get_task(&self, name: &str) -> Option<Arc<dyn Task>> {
        self.tasks.get(name).cloned()
    }

    fn scheduled_tasks(&self) -> Vec<ScheduledTask> {
        self.schedule.clone()
    }
}
