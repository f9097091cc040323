use shared_types::{InvoiceId, InvoicePaymentId};

use super::error::DataLayerError;
use crate::model::invoice_payment::{InvoicePayment, UpdateInvoicePaymentRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait InvoicePaymentRepository: Send + Sync {
    async fn create_payment(
        &self,
        request: InvoicePayment,
    ) -> Result<InvoicePaymentId, DataLayerError>;

    async fn get_payment(
        &self,
        id: &InvoicePaymentId,
    ) -> Result<Option<InvoicePayment>, DataLayerError>;

    /// Payments of an invoice ordered by payment date
    async fn get_payment_list(
        &self,
        invoice_id: &InvoiceId,
    ) -> Result<Vec<InvoicePayment>, DataLayerError>;

    async fn count_payments(&self, invoice_id: &InvoiceId) -> Result<u64, DataLayerError>;

    async fn update_payment(
        &self,
        request: UpdateInvoicePaymentRequest,
    ) -> Result<(), DataLayerError>;

    async fn delete_payment(&self, id: &InvoicePaymentId) -> Result<(), DataLayerError>;
}
