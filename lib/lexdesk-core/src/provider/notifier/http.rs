use std::time::Duration;

use lexdesk_crypto::utilities::encode_base64;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Notification, Notifier, NotifierError};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub url: Url,
    pub api_key: Option<String>,
    pub sender: String,
}

/// Delivers notifications through a JSON mail API
pub struct HttpNotifier {
    client: reqwest::Client,
    params: Params,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MailRequestDTO<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    attachments: Vec<MailAttachmentDTO<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MailAttachmentDTO<'a> {
    file_name: &'a str,
    media_type: &'a str,
    content: String,
}

impl HttpNotifier {
    pub fn new(client: reqwest::Client, params: Params, timeout: Duration) -> Self {
        Self {
            client,
            params,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, notification: Notification) -> Result<(), NotifierError> {
        let attachments = notification
            .attachments
            .iter()
            .map(|attachment| {
                Ok(MailAttachmentDTO {
                    file_name: &attachment.file_name,
                    media_type: &attachment.media_type,
                    content: encode_base64(&attachment.content)
                        .map_err(|err| NotifierError::Mapping(err.to_string()))?,
                })
            })
            .collect::<Result<Vec<_>, NotifierError>>()?;

        let body = MailRequestDTO {
            from: &self.params.sender,
            to: &notification.recipient,
            subject: &notification.subject,
            html: &notification.html_body,
            attachments,
        };

        let mut request = self
            .client
            .post(self.params.url.clone())
            .timeout(self.timeout)
            .json(&body);
        if let Some(api_key) = &self.params.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                NotifierError::Timeout(self.timeout)
            } else {
                NotifierError::Transport(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifierError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
