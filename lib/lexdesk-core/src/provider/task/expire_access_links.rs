use serde_json::{Value, json};

use super::Task;
use crate::service::access_link::AccessLinkService;
use crate::service::error::ServiceError;

/// Moves ACTIVE access links past their expiry to EXPIRED
pub struct ExpireAccessLinks {
    access_link_service: AccessLinkService,
}

impl ExpireAccessLinks {
    pub(crate) fn new(access_link_service: AccessLinkService) -> Self {
        Self {
            access_link_service,
        }
    }
}

#[async_trait::async_trait]
impl Task for ExpireAccessLinks {
    async fn run(&self) -> Result<Value, ServiceError> {
        let expired = self.access_link_service.expire_access_links().await?;

        Ok(json!({ "expired": expired }))
    }
}
