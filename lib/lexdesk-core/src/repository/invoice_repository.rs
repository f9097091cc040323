use shared_types::InvoiceId;

use super::error::DataLayerError;
use crate::model::common::LockType;
use crate::model::invoice::{
    GetInvoiceList, Invoice, InvoiceListQuery, InvoiceRelations, ReminderQuery,
    UpdateInvoiceRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn create_invoice(&self, request: Invoice) -> Result<InvoiceId, DataLayerError>;

    /// Fetches an invoice, with `lock` the row stays locked until the surrounding transaction ends
    async fn get_invoice(
        &self,
        id: &InvoiceId,
        relations: &InvoiceRelations,
        lock: Option<LockType>,
    ) -> Result<Option<Invoice>, DataLayerError>;

    async fn get_invoice_list(
        &self,
        query: InvoiceListQuery,
    ) -> Result<GetInvoiceList, DataLayerError>;

    async fn update_invoice(&self, request: UpdateInvoiceRequest) -> Result<(), DataLayerError>;

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), DataLayerError>;

    /// Highest sequence number used so far within `year`
    async fn get_max_sequence(&self, year: i32) -> Result<Option<u32>, DataLayerError>;

    /// Open invoices past due that were not reminded recently, client relation loaded
    async fn get_invoices_for_reminder(
        &self,
        query: ReminderQuery,
    ) -> Result<Vec<Invoice>, DataLayerError>;
}
