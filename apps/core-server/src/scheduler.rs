use lexdesk_core::provider::task::provider::ScheduledTask;
use lexdesk_core::service::task::TaskService;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawns one periodic runner per scheduled task
pub fn spawn_scheduled_tasks(task_service: &TaskService) -> Vec<JoinHandle<()>> {
    task_service
        .scheduled_tasks()
        .into_iter()
        .map(|task| tokio::spawn(run_periodically(task_service.clone(), task)))
        .collect()
}

async fn run_periodically(task_service: TaskService, task: ScheduledTask) {
    tracing::info!(
        task = %task.name,
        interval_seconds = task.interval.as_secs(),
        "Scheduling task"
    );

    let mut interval = tokio::time::interval(task.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // skip the immediate first tick
    interval.tick().await;

    loop {
        interval.tick().await;

        match task_service.run_scheduled_task(&task.name).await {
            Ok(result) => tracing::info!(task = %task.name, %result, "Scheduled task finished"),
            Err(error) => tracing::error!(task = %task.name, %error, "Scheduled task failed"),
        }
    }
}
