use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::provider::{ScheduledTask, TaskProvider, TaskProviderImpl};
use super::tasks_from_config;
use crate::config::ConfigValidationError;
use crate::config::core_config::{AppConfig, CoreConfig, NoCustomConfig};
use crate::proto::transaction_manager::NoTransactionManager;
use crate::provider::capability_token::MockCapabilityTokenProvider;
use crate::provider::notifier::MockNotifier;
use crate::provider::pdf_renderer::MockPdfRenderer;
use crate::provider::pin::MockPinProvider;
use crate::repository::access_link_repository::MockAccessLinkRepository;
use crate::repository::admin_repository::MockAdminRepository;
use crate::repository::case_repository::MockCaseRepository;
use crate::repository::client_repository::MockClientRepository;
use crate::repository::comment_repository::MockCommentRepository;
use crate::repository::invoice_payment_repository::MockInvoicePaymentRepository;
use crate::repository::invoice_repository::MockInvoiceRepository;
use crate::service::access_link::AccessLinkService;
use crate::service::invoice::InvoiceService;
use crate::service::test_utilities::{
    NOW, fixed_clock, generic_config, permissive_history_repository,
};

fn parse_config(yaml: &str) -> CoreConfig {
    AppConfig::<NoCustomConfig>::from_yaml([yaml]).unwrap().core
}

fn access_link_service(access_link_repository: MockAccessLinkRepository) -> AccessLinkService {
    AccessLinkService::new(
        Arc::new(access_link_repository),
        Arc::new(MockCaseRepository::default()),
        Arc::new(MockCommentRepository::default()),
        Arc::new(MockAdminRepository::default()),
        Arc::new(permissive_history_repository()),
        Arc::new(MockPinProvider::default()),
        Arc::new(MockCapabilityTokenProvider::default()),
        Arc::new(MockNotifier::default()),
        Arc::new(NoTransactionManager),
        fixed_clock(NOW),
        Arc::new(generic_config()),
    )
}

fn invoice_service() -> InvoiceService {
    InvoiceService::new(
        Arc::new(MockInvoiceRepository::default()),
        Arc::new(MockInvoicePaymentRepository::default()),
        Arc::new(MockClientRepository::default()),
        Arc::new(permissive_history_repository()),
        Arc::new(MockNotifier::default()),
        Arc::new(MockPdfRenderer::default()),
        Arc::new(NoTransactionManager),
        fixed_clock(NOW),
        Arc::new(generic_config()),
    )
}

#[test]
fn test_disabled_tasks_are_skipped_and_schedule_lists_intervals() {
    let config = parse_config(
        r#"
task:
  EXPIRE_ACCESS_LINKS:
    type: EXPIRE_ACCESS_LINKS
    intervalSeconds: 60
  INVOICE_REMINDER:
    type: INVOICE_REMINDER
  RETAIN_ACCESS_LINKS:
    type: RETAIN_ACCESS_LINKS
    enabled: false
    intervalSeconds: 3600
"#,
    );

    let tasks = tasks_from_config(
        &config.task,
        access_link_service(MockAccessLinkRepository::default()),
        invoice_service(),
    )
    .unwrap();
    let provider = TaskProviderImpl::new(tasks, &config.task);

    assert!(provider.get_task("EXPIRE_ACCESS_LINKS").is_some());
    assert!(provider.get_task("INVOICE_REMINDER").is_some());
    assert!(provider.get_task("RETAIN_ACCESS_LINKS").is_none());
    assert_eq!(
        provider.scheduled_tasks(),
        vec![ScheduledTask {
            name: "EXPIRE_ACCESS_LINKS".to_string(),
            interval: Duration::from_secs(60),
        }]
    );
}

#[test]
fn test_retain_task_requires_params() {
    let config = parse_config(
        r#"
task:
  RETAIN_ACCESS_LINKS:
    type: RETAIN_ACCESS_LINKS
"#,
    );

    let result = tasks_from_config(
        &config.task,
        access_link_service(MockAccessLinkRepository::default()),
        invoice_service(),
    );

    assert!(matches!(result, Err(ConfigValidationError::MissingParams(_))));
}

#[test]
fn test_zero_interval_rejected() {
    let config = parse_config(
        r#"
task:
  EXPIRE_ACCESS_LINKS:
    type: EXPIRE_ACCESS_LINKS
    intervalSeconds: 0
"#,
    );

    let result = tasks_from_config(
        &config.task,
        access_link_service(MockAccessLinkRepository::default()),
        invoice_service(),
    );

    assert!(matches!(
        result,
        Err(ConfigValidationError::InvalidValue { key, .. })
            if key == "task.EXPIRE_ACCESS_LINKS.intervalSeconds"
    ));
}

#[tokio::test]
async fn test_retain_task_deletes_links_older_than_retention() {
    let config = parse_config(
        r#"
task:
  RETAIN_ACCESS_LINKS:
    type: RETAIN_ACCESS_LINKS
    params:
      retentionDays: 30
"#,
    );

    let mut access_link_repository = MockAccessLinkRepository::default();
    access_link_repository
        .expect_delete_terminal_before()
        .withf(|cutoff| *cutoff == NOW - time::Duration::days(30))
        .once()
        .returning(|_| Ok(2));

    let tasks = tasks_from_config(
        &config.task,
        access_link_service(access_link_repository),
        invoice_service(),
    )
    .unwrap();

    let result = tasks["RETAIN_ACCESS_LINKS"].run().await.unwrap();

    assert_eq!(result, json!({ "deleted": 2 }));
}
