use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::config::core_config::{PdfConfig, PdfRendererType};
use crate::config::{ConfigError, ConfigValidationError};

pub mod http;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("PDF rendering is not configured")]
    NotConfigured,
    #[error("Renderer transport error: `{0}`")]
    Transport(String),
    #[error("Renderer rejected template `{template}` with status {status}")]
    Rejected { template: String, status: u16 },
}

/// Turns a template name and a data object into a document
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, template: &str, data: Value) -> Result<Vec<u8>, RendererError>;
}

pub struct NoPdfRenderer;

#[async_trait::async_trait]
impl PdfRenderer for NoPdfRenderer {
    async fn render(&self, _template: &str, _data: Value) -> Result<Vec<u8>, RendererError> {
        Err(RendererError::NotConfigured)
    }
}

pub(crate) fn pdf_renderer_from_config(
    config: &PdfConfig,
) -> Result<Arc<dyn PdfRenderer>, ConfigError> {
    Ok(match config.r#type {
        PdfRendererType::None => Arc::new(NoPdfRenderer),
        PdfRendererType::Http => {
            let params = config
                .params
                .clone()
                .ok_or_else(|| ConfigValidationError::MissingParams("pdf".to_owned()))?;
            let params: http::Params = serde_json::from_value(params).map_err(|source| {
                ConfigValidationError::FieldsDeserialization {
                    key: "pdf".to_owned(),
                    source,
                }
            })?;

            Arc::new(http::HttpPdfRenderer::new(reqwest::Client::new(), params))
        }
    })
}
