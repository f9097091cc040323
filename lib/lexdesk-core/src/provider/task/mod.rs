use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use self::expire_access_links::ExpireAccessLinks;
use self::invoice_reminder::InvoiceReminder;
use self::retain_access_links::RetainAccessLinks;
use crate::config::ConfigValidationError;
use crate::config::core_config::{TaskConfig, TaskType};
use crate::service::access_link::AccessLinkService;
use crate::service::error::ServiceError;
use crate::service::invoice::InvoiceService;

pub mod expire_access_links;
pub mod invoice_reminder;
pub mod provider;
pub mod retain_access_links;

#[cfg(test)]
mod test;

/// Unit of background work, triggered by the scheduler or on demand
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait Task: Send + Sync {
    async fn run(&self) -> Result<Value, ServiceError>;
}

/// Instantiates every enabled task of the configuration, keyed by its config name
pub(crate) fn tasks_from_config(
    config: &TaskConfig,
    access_link_service: AccessLinkService,
    invoice_service: InvoiceService,
) -> Result<HashMap<String, Arc<dyn Task>>, ConfigValidationError> {
    let mut tasks: HashMap<String, Arc<dyn Task>> = HashMap::new();

    for (name, fields) in config.iter() {
        if !fields.enabled() {
            continue;
        }

        if fields.interval.is_some_and(|interval| interval.is_zero()) {
            return Err(ConfigValidationError::InvalidValue {
                key: format!("task.{name}.intervalSeconds"),
                value: "0".to_string(),
                reason: "interval must be positive".to_string(),
            });
        }

        let task = match fields.r#type {
            TaskType::ExpireAccessLinks => {
                Arc::new(ExpireAccessLinks::new(access_link_service.clone())) as _
            }
            TaskType::RetainAccessLinks => Arc::new(RetainAccessLinks::new(
                fields.deserialize_params(name)?,
                access_link_service.clone(),
            )) as _,
            TaskType::InvoiceReminder => {
                let params = match fields.params {
                    Some(_) => fields.deserialize_params(name)?,
                    None => Default::default(),
                };
                Arc::new(InvoiceReminder::new(params, invoice_service.clone())) as _
            }
        };

        tasks.insert(name.to_owned(), task);
    }

    Ok(tasks)
}
