use autometrics::autometrics;
use lexdesk_core::model::invoice_payment::{InvoicePayment, UpdateInvoicePaymentRequest};
use lexdesk_core::repository::error::DataLayerError;
use lexdesk_core::repository::invoice_payment_repository::InvoicePaymentRepository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};
use shared_types::{InvoiceId, InvoicePaymentId};
use time::OffsetDateTime;

use super::InvoicePaymentProvider;
use crate::entity::invoice_payment;
use crate::mapper::{to_data_layer_error, to_minor_units, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl InvoicePaymentRepository for InvoicePaymentProvider {
    async fn create_payment(
        &self,
        request: InvoicePayment,
    ) -> Result<InvoicePaymentId, DataLayerError> {
        let id = request.id;

        invoice_payment::Entity::insert(invoice_payment::ActiveModel::try_from(request)?)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_payment(
        &self,
        id: &InvoicePaymentId,
    ) -> Result<Option<InvoicePayment>, DataLayerError> {
        let payment = invoice_payment::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(payment.map(InvoicePayment::from))
    }

    async fn get_payment_list(
        &self,
        invoice_id: &InvoiceId,
    ) -> Result<Vec<InvoicePayment>, DataLayerError> {
        let payments = invoice_payment::Entity::find()
            .filter(invoice_payment::Column::InvoiceId.eq(invoice_id))
            .order_by_asc(invoice_payment::Column::PaymentDate)
            .order_by_asc(invoice_payment::Column::CreatedDate)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(payments.into_iter().map(InvoicePayment::from).collect())
    }

    async fn count_payments(&self, invoice_id: &InvoiceId) -> Result<u64, DataLayerError> {
        invoice_payment::Entity::find()
            .filter(invoice_payment::Column::InvoiceId.eq(invoice_id))
            .count(&self.db.tx())
            .await
            .map_err(to_data_layer_error)
    }

    async fn update_payment(
        &self,
        request: UpdateInvoicePaymentRequest,
    ) -> Result<(), DataLayerError> {
        let update_model = invoice_payment::ActiveModel {
            id: Unchanged(request.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            amount: request
                .amount
                .map(to_minor_units)
                .transpose()?
                .map(Set)
                .unwrap_or_default(),
            mode: request.mode.map(|mode| Set(mode.into())).unwrap_or_default(),
            transaction_ref: request.transaction_ref.map(Set).unwrap_or_default(),
            comment: request.comment.map(Set).unwrap_or_default(),
            payment_date: request.payment_date.map(Set).unwrap_or_default(),
            ..Default::default()
        };

        update_model
            .update(&self.db.tx())
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete_payment(&self, id: &InvoicePaymentId) -> Result<(), DataLayerError> {
        let result = invoice_payment::Entity::delete_by_id(id)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
