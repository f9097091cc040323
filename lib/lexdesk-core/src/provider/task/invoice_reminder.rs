use serde::Deserialize;
use serde_json::{Value, json};
use time::Duration;

use super::Task;
use crate::service::error::ServiceError;
use crate::service::invoice::InvoiceService;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    /// Minimum number of days between two reminders of the same invoice
    pub interval_days: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { interval_days: 7 }
    }
}

/// Reminds clients of overdue UNPAID and PARTIALLY_PAID invoices
pub struct InvoiceReminder {
    params: Params,
    invoice_service: InvoiceService,
}

impl InvoiceReminder {
    pub(crate) fn new(params: Params, invoice_service: InvoiceService) -> Self {
        Self {
            params,
            invoice_service,
        }
    }
}

#[async_trait::async_trait]
impl Task for InvoiceReminder {
    async fn run(&self) -> Result<Value, ServiceError> {
        let reminded = self
            .invoice_service
            .send_reminders(Duration::days(self.params.interval_days.into()))
            .await?;

        Ok(json!({ "reminded": reminded }))
    }
}
