use super::{Notification, Notifier, NotifierError};

/// Writes notifications to the log instead of delivering them
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: Notification) -> Result<(), NotifierError> {
        tracing::info!(
            recipient = notification.recipient,
            subject = notification.subject,
            attachments = notification.attachments.len(),
            "Notification: {}",
            notification.html_body
        );
        Ok(())
    }
}
