use serde::Deserialize;
use serde_json::{Value, json};
use time::Duration;

use super::Task;
use crate::service::access_link::AccessLinkService;
use crate::service::error::ServiceError;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub retention_days: u32,
}

/// Deletes USED and EXPIRED links once their retention period has passed
pub struct RetainAccessLinks {
    params: Params,
    access_link_service: AccessLinkService,
}

impl RetainAccessLinks {
    pub(crate) fn new(params: Params, access_link_service: AccessLinkService) -> Self {
        Self {
            params,
            access_link_service,
        }
    }
}

#[async_trait::async_trait]
impl Task for RetainAccessLinks {
    async fn run(&self) -> Result<Value, ServiceError> {
        let deleted = self
            .access_link_service
            .delete_terminal_access_links(Duration::days(self.params.retention_days.into()))
            .await?;

        Ok(json!({ "deleted": deleted }))
    }
}
