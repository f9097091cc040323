use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::ConfigError;
use crate::config::core_config::{NotificationConfig, NotificationType};

pub mod http;
pub mod log;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub attachments: Vec<NotificationAttachment>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotificationAttachment {
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Notification transport error: `{0}`")]
    Transport(String),
    #[error("Notification rejected with status {0}")]
    Rejected(u16),
    #[error("Notification timed out after {0:?}")]
    Timeout(Duration),
    #[error("Notification mapping error: `{0}`")]
    Mapping(String),
}

/// Outbound message delivery (e-mail)
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: Notification) -> Result<(), NotifierError>;
}

pub(crate) fn notifier_from_config(
    config: &NotificationConfig,
) -> Result<Arc<dyn Notifier>, ConfigError> {
    Ok(match config.r#type {
        NotificationType::Log => Arc::new(log::LogNotifier),
        NotificationType::Http => {
            let params = config
                .params
                .clone()
                .ok_or_else(|| {
                    crate::config::ConfigValidationError::MissingParams("notification".to_owned())
                })
                .and_then(|params| {
                    serde_json::from_value::<http::Params>(params).map_err(|source| {
                        crate::config::ConfigValidationError::FieldsDeserialization {
                            key: "notification".to_owned(),
                            source,
                        }
                    })
                })?;

            Arc::new(http::HttpNotifier::new(
                reqwest::Client::new(),
                params,
                config.timeout,
            ))
        }
    })
}

/// Sends a notification without letting a failure reach the caller.
///
/// Returns whether the notification was delivered.
pub(crate) async fn send_best_effort(
    notifier: &dyn Notifier,
    notification: Notification,
    timeout: Duration,
) -> bool {
    let recipient = notification.recipient.clone();

    let result = match tokio::time::timeout(timeout, notifier.send(notification)).await {
        Ok(result) => result,
        Err(_) => Err(NotifierError::Timeout(timeout)),
    };

    match result {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%recipient, "Failed to send notification: {error}");
            false
        }
    }
}
