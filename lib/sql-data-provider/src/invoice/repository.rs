use autometrics::autometrics;
use lexdesk_core::model::common::LockType;
use lexdesk_core::model::invoice::{
    GetInvoiceList, Invoice, InvoiceListQuery, InvoiceRelations, ReminderQuery,
    UpdateInvoiceRequest,
};
use lexdesk_core::repository::error::DataLayerError;
use lexdesk_core::repository::invoice_repository::InvoiceRepository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, Unchanged,
};
use shared_types::InvoiceId;

use super::InvoiceProvider;
use super::mapper::invoice_from_model;
use crate::common::fetch_page;
use crate::entity::{client, invoice};
use crate::mapper::{to_data_layer_error, to_minor_units, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl InvoiceRepository for InvoiceProvider {
    async fn create_invoice(&self, request: Invoice) -> Result<InvoiceId, DataLayerError> {
        let id = request.id;

        invoice::Entity::insert(invoice::ActiveModel::try_from(request)?)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_invoice(
        &self,
        id: &InvoiceId,
        relations: &InvoiceRelations,
        lock: Option<LockType>,
    ) -> Result<Option<Invoice>, DataLayerError> {
        let db = self.db.tx();

        let mut select = invoice::Entity::find_by_id(id);
        if let Some(LockType::Update) = lock {
            select = select.lock_exclusive();
        }

        let Some(model) = select.one(&db).await.map_err(to_data_layer_error)? else {
            return Ok(None);
        };

        let client = if relations.client {
            let client = client::Entity::find_by_id(model.client_id)
                .one(&db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or_else(|| {
                    DataLayerError::MappingError(format!("Missing client of invoice {id}"))
                })?;
            Some(client)
        } else {
            None
        };

        Ok(Some(invoice_from_model(model, client)))
    }

    async fn get_invoice_list(
        &self,
        query: InvoiceListQuery,
    ) -> Result<GetInvoiceList, DataLayerError> {
        let mut select = invoice::Entity::find()
            .order_by_desc(invoice::Column::Year)
            .order_by_desc(invoice::Column::Sequence);

        if let Some(owner_id) = query.owner_id {
            select = select.filter(invoice::Column::OwnerId.eq(owner_id));
        }
        if let Some(client_id) = query.client_id {
            select = select.filter(invoice::Column::ClientId.eq(client_id));
        }
        if let Some(status) = query.status {
            select = select.filter(invoice::Column::Status.eq(invoice::InvoiceStatus::from(status)));
        }

        let page = fetch_page(select, &query.pagination, &self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(page.map(|model| invoice_from_model(model, None)))
    }

    async fn update_invoice(&self, request: UpdateInvoiceRequest) -> Result<(), DataLayerError> {
        let paid_amount = request
            .paid_amount
            .map(to_minor_units)
            .transpose()?
            .map(Set)
            .unwrap_or_default();

        let (last_reminder_sent_at, reminder_count) = match request.reminder {
            Some(reminder) => (
                Set(Some(reminder.last_reminder_sent_at)),
                Set(reminder.reminder_count),
            ),
            None => Default::default(),
        };

        let update_model = invoice::ActiveModel {
            id: Unchanged(request.id),
            last_modified: Set(request.last_modified),
            paid_amount,
            status: request
                .status
                .map(|status| Set(status.into()))
                .unwrap_or_default(),
            last_reminder_sent_at,
            reminder_count,
            ..Default::default()
        };

        update_model
            .update(&self.db.tx())
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), DataLayerError> {
        let result = invoice::Entity::delete_by_id(id)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn get_max_sequence(&self, year: i32) -> Result<Option<u32>, DataLayerError> {
        let max_sequence: Option<Option<u32>> = invoice::Entity::find()
            .select_only()
            .column_as(invoice::Column::Sequence.max(), "max_sequence")
            .filter(invoice::Column::Year.eq(year))
            .into_tuple()
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(max_sequence.flatten())
    }

    async fn get_invoices_for_reminder(
        &self,
        query: ReminderQuery,
    ) -> Result<Vec<Invoice>, DataLayerError> {
        let invoices = invoice::Entity::find()
            .find_also_related(client::Entity)
            .filter(invoice::Column::Status.is_in([
                invoice::InvoiceStatus::Unpaid,
                invoice::InvoiceStatus::PartiallyPaid,
            ]))
            .filter(invoice::Column::DueDate.lt(query.due_before))
            .filter(
                Condition::any()
                    .add(invoice::Column::LastReminderSentAt.is_null())
                    .add(invoice::Column::LastReminderSentAt.lt(query.last_reminded_before)),
            )
            .order_by_asc(invoice::Column::DueDate)
            .order_by_asc(invoice::Column::Id)
            .limit(query.limit)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(invoices
            .into_iter()
            .map(|(invoice, client)| invoice_from_model(invoice, client))
            .collect())
    }
}
