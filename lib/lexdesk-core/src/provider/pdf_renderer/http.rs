use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use super::{PdfRenderer, RendererError};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub url: Url,
}

/// Renders documents with an external HTTP rendering service
pub struct HttpPdfRenderer {
    client: reqwest::Client,
    params: Params,
}

impl HttpPdfRenderer {
    pub fn new(client: reqwest::Client, params: Params) -> Self {
        Self { client, params }
    }
}

#[async_trait::async_trait]
impl PdfRenderer for HttpPdfRenderer {
    async fn render(&self, template: &str, data: Value) -> Result<Vec<u8>, RendererError> {
        let response = self
            .client
            .post(self.params.url.clone())
            .json(&json!({ "template": template, "data": data }))
            .send()
            .await
            .map_err(|err| RendererError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RendererError::Rejected {
                template: template.to_owned(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| RendererError::Transport(err.to_string()))?;

        Ok(bytes.to_vec())
    }
}
