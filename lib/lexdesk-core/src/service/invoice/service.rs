use rust_decimal::Decimal;
use shared_types::{InvoiceId, InvoicePaymentId};
use time::Duration;

use super::InvoiceService;
use super::dto::{
    CreateInvoiceRequestDTO, CreatePaymentRequestDTO, GetInvoiceListQueryDTO,
    GetInvoiceListResponseDTO, InvoicePaymentListDTO, InvoiceResponseDTO, PaymentResultDTO,
    UpdatePaymentRequestDTO,
};
use super::ledger;
use super::mapper::{
    format_invoice_number, invoice_document, parse_payment_mode, payment_received_notification,
    reminder_notification,
};
use super::validator::validate_create_request;
use crate::model::common::{LockType, ListPagination};
use crate::model::history::{HistoryAction, HistoryEntityType};
use crate::model::invoice::{
    Invoice, InvoiceListQuery, InvoiceRelations, InvoiceStatus, ReminderBookkeeping,
    ReminderQuery, UpdateInvoiceRequest,
};
use crate::model::invoice_payment::{InvoicePayment, UpdateInvoicePaymentRequest};
use crate::proto::session::Session;
use crate::provider::notifier::send_best_effort;
use crate::repository::error::DataLayerError;
use crate::repository::invoice_payment_repository::InvoicePaymentRepository;
use crate::repository::invoice_repository::InvoiceRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::util::history::{history_event, log_history_event};
use crate::util::money::{derive_status, round2};

const INVOICE_NUMBER_ATTEMPTS: usize = 3;
const REMINDER_BATCH_SIZE: u64 = 200;

impl InvoiceService {
    /// Creates an invoice with the next number of the current year
    ///
    /// # Arguments
    ///
    /// * `request` - client, amount and due date
    /// * `session` - acting admin, must own the client
    pub async fn create_invoice(
        &self,
        request: CreateInvoiceRequestDTO,
        session: &Session,
    ) -> Result<InvoiceId, ServiceError> {
        validate_create_request(&request)?;

        let Some(client) = self.client_repository.get_client(&request.client_id).await? else {
            return Err(EntityNotFoundError::Client(request.client_id).into());
        };
        session.ensure_owner(&client.owner_id)?;

        let amount = round2(request.amount);
        let now = self.clock.now_utc();
        let year = now.year();
        let prefix = &self.config.invoice.number_prefix;
        let (client_id, owner_id) = (client.id, client.owner_id);
        let due_date = request.due_date;

        for attempt in 1..=INVOICE_NUMBER_ATTEMPTS {
            let invoice_repository = &self.invoice_repository;
            let comments = request.comments.clone();
            let result = self
                .transaction_manager
                .tx(async move {
                    let sequence = invoice_repository.get_max_sequence(year).await?.unwrap_or(0) + 1;

                    invoice_repository
                        .create_invoice(Invoice {
                            id: InvoiceId::new_v4(),
                            created_date: now,
                            last_modified: now,
                            number: format_invoice_number(prefix, year, sequence),
                            year,
                            sequence,
                            client_id,
                            owner_id,
                            amount,
                            paid_amount: Decimal::ZERO,
                            status: derive_status(Decimal::ZERO, amount),
                            due_date,
                            comments,
                            last_reminder_sent_at: None,
                            reminder_count: 0,
                            client: None,
                        })
                        .await
                })
                .await?;

            match result {
                Ok(id) => {
                    tracing::info!(%id, %amount, "Invoice created");
                    self.log_event(id, HistoryAction::Created, Some(session))
                        .await;
                    return Ok(id);
                }
                Err(DataLayerError::AlreadyExists) => {
                    tracing::warn!(year, attempt, "Invoice number already taken, retrying");
                }
                Err(error) => return Err(error.into()),
            }
        }

        Err(BusinessLogicError::InvoiceNumberConflict(year).into())
    }

    /// Returns details of an invoice
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `session` - acting admin, must own the invoice
    pub async fn get_invoice(
        &self,
        invoice_id: &InvoiceId,
        session: &Session,
    ) -> Result<InvoiceResponseDTO, ServiceError> {
        let invoice = self
            .get_owned_invoice(invoice_id, &InvoiceRelations::default(), session)
            .await?;

        Ok(invoice.into())
    }

    /// Returns a page of invoices, advocates only see their own
    pub async fn get_invoice_list(
        &self,
        query: GetInvoiceListQueryDTO,
        session: &Session,
    ) -> Result<GetInvoiceListResponseDTO, ServiceError> {
        let list = self
            .invoice_repository
            .get_invoice_list(InvoiceListQuery {
                pagination: ListPagination {
                    page: query.page,
                    page_size: query.page_size,
                },
                owner_id: session.owner_filter(),
                client_id: query.client_id,
                status: query.status,
            })
            .await?;

        Ok(list.map(Into::into))
    }

    /// Cancels an unpaid or partially paid invoice
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `session` - acting admin, must own the invoice
    pub async fn cancel_invoice(
        &self,
        invoice_id: &InvoiceId,
        session: &Session,
    ) -> Result<(), ServiceError> {
        let now = self.clock.now_utc();
        let invoice_repository = &self.invoice_repository;
        self.transaction_manager
            .tx(async move {
                let invoice = lock_invoice(&**invoice_repository, invoice_id).await?;
                session.ensure_owner(&invoice.owner_id)?;

                match invoice.status {
                    InvoiceStatus::Paid => {
                        return Err(BusinessLogicError::InvoiceAlreadyPaid(invoice.id).into());
                    }
                    InvoiceStatus::Cancelled => {
                        return Err(BusinessLogicError::InvoiceCancelled(invoice.id).into());
                    }
                    InvoiceStatus::Unpaid | InvoiceStatus::PartiallyPaid => {}
                }

                invoice_repository
                    .update_invoice(UpdateInvoiceRequest {
                        id: invoice.id,
                        last_modified: now,
                        paid_amount: None,
                        status: Some(InvoiceStatus::Cancelled),
                        reminder: None,
                    })
                    .await?;

                Ok::<_, ServiceError>(())
            })
            .await??;

        tracing::info!(%invoice_id, "Invoice cancelled");
        self.log_event(*invoice_id, HistoryAction::Cancelled, Some(session))
            .await;

        Ok(())
    }

    /// Deletes an invoice without payments
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `session` - acting admin, must own the invoice
    pub async fn delete_invoice(
        &self,
        invoice_id: &InvoiceId,
        session: &Session,
    ) -> Result<(), ServiceError> {
        let invoice_repository = &self.invoice_repository;
        let payment_repository = &self.payment_repository;
        self.transaction_manager
            .tx(async move {
                let invoice = lock_invoice(&**invoice_repository, invoice_id).await?;
                session.ensure_owner(&invoice.owner_id)?;

                if payment_repository.count_payments(invoice_id).await? > 0 {
                    return Err(BusinessLogicError::InvoiceHasPayments(invoice.id).into());
                }

                invoice_repository.delete_invoice(invoice_id).await?;

                Ok::<_, ServiceError>(())
            })
            .await??;

        tracing::info!(%invoice_id, "Invoice deleted");
        self.log_event(*invoice_id, HistoryAction::Deleted, Some(session))
            .await;

        Ok(())
    }

    /// Renders the invoice document through the configured PDF renderer
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `session` - acting admin, must own the invoice
    pub async fn render_invoice_pdf(
        &self,
        invoice_id: &InvoiceId,
        session: &Session,
    ) -> Result<Vec<u8>, ServiceError> {
        let invoice = self
            .get_owned_invoice(invoice_id, &InvoiceRelations { client: true }, session)
            .await?;
        let payments = self.payment_repository.get_payment_list(invoice_id).await?;

        let document = invoice_document(
            &invoice,
            invoice.client.as_ref(),
            &payments,
            &self.config.invoice.currency,
        );

        Ok(self.pdf_renderer.render("invoice", document).await?)
    }

    /// Records a payment and updates paid amount and status of the invoice atomically
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `request` - payment details
    /// * `session` - acting admin, must own the invoice
    pub async fn add_payment(
        &self,
        invoice_id: &InvoiceId,
        request: CreatePaymentRequestDTO,
        session: &Session,
    ) -> Result<PaymentResultDTO, ServiceError> {
        let mode = parse_payment_mode(&request.mode)?;
        let now = self.clock.now_utc();

        let invoice_repository = &self.invoice_repository;
        let payment_repository = &self.payment_repository;
        let (payment, invoice) = self
            .transaction_manager
            .tx(async move {
                let invoice = lock_invoice(&**invoice_repository, invoice_id).await?;
                session.ensure_owner(&invoice.owner_id)?;

                let update = ledger::add_payment(&invoice, request.amount)?;

                let payment = InvoicePayment {
                    id: InvoicePaymentId::new_v4(),
                    created_date: now,
                    last_modified: now,
                    invoice_id: invoice.id,
                    amount: round2(request.amount),
                    mode,
                    transaction_ref: request.transaction_ref,
                    comment: request.comment,
                    payment_date: request.payment_date.unwrap_or(now),
                    recorded_by: session.admin_id,
                };
                payment_repository.create_payment(payment.clone()).await?;

                invoice_repository
                    .update_invoice(UpdateInvoiceRequest {
                        id: invoice.id,
                        last_modified: now,
                        paid_amount: Some(update.paid_amount),
                        status: Some(update.status),
                        reminder: None,
                    })
                    .await?;

                Ok::<_, ServiceError>((
                    payment,
                    Invoice {
                        paid_amount: update.paid_amount,
                        status: update.status,
                        last_modified: now,
                        ..invoice
                    },
                ))
            })
            .await??;

        tracing::info!(
            %invoice_id,
            payment_id = %payment.id,
            amount = %payment.amount,
            status = %invoice.status,
            "Payment added"
        );
        self.log_event(invoice.id, HistoryAction::PaymentAdded, Some(session))
            .await;
        self.notify_payment_received(&invoice, &payment).await;

        Ok(PaymentResultDTO {
            invoice: (&invoice).into(),
            payment: payment.into(),
        })
    }

    /// Changes a recorded payment, super-admin only
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `payment_id` - id of a payment of that invoice
    /// * `request` - fields to change
    /// * `session` - acting admin
    pub async fn update_payment(
        &self,
        invoice_id: &InvoiceId,
        payment_id: &InvoicePaymentId,
        request: UpdatePaymentRequestDTO,
        session: &Session,
    ) -> Result<PaymentResultDTO, ServiceError> {
        session.ensure_super_admin()?;

        let mode = request
            .mode
            .as_deref()
            .map(parse_payment_mode)
            .transpose()?;
        let now = self.clock.now_utc();

        let invoice_repository = &self.invoice_repository;
        let payment_repository = &self.payment_repository;
        let (payment, invoice) = self
            .transaction_manager
            .tx(async move {
                let invoice = lock_invoice(&**invoice_repository, invoice_id).await?;
                let payment =
                    get_invoice_payment(&**payment_repository, invoice_id, payment_id).await?;

                let new_amount = request.amount.map(round2).unwrap_or(payment.amount);
                let update = ledger::change_payment(&invoice, payment.amount, new_amount)?;

                payment_repository
                    .update_payment(UpdateInvoicePaymentRequest {
                        id: payment.id,
                        amount: Some(new_amount),
                        mode,
                        transaction_ref: request.transaction_ref.clone(),
                        comment: request.comment.clone(),
                        payment_date: request.payment_date,
                    })
                    .await?;

                invoice_repository
                    .update_invoice(UpdateInvoiceRequest {
                        id: invoice.id,
                        last_modified: now,
                        paid_amount: Some(update.paid_amount),
                        status: Some(update.status),
                        reminder: None,
                    })
                    .await?;

                Ok::<_, ServiceError>((
                    InvoicePayment {
                        amount: new_amount,
                        mode: mode.unwrap_or(payment.mode),
                        transaction_ref: request
                            .transaction_ref
                            .unwrap_or(payment.transaction_ref),
                        comment: request.comment.unwrap_or(payment.comment),
                        payment_date: request.payment_date.unwrap_or(payment.payment_date),
                        last_modified: now,
                        ..payment
                    },
                    Invoice {
                        paid_amount: update.paid_amount,
                        status: update.status,
                        last_modified: now,
                        ..invoice
                    },
                ))
            })
            .await??;

        tracing::info!(%invoice_id, %payment_id, amount = %payment.amount, "Payment updated");
        self.log_event(invoice.id, HistoryAction::PaymentUpdated, Some(session))
            .await;

        Ok(PaymentResultDTO {
            invoice: (&invoice).into(),
            payment: payment.into(),
        })
    }

    /// Removes a recorded payment, super-admin only
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `payment_id` - id of a payment of that invoice
    /// * `session` - acting admin
    pub async fn delete_payment(
        &self,
        invoice_id: &InvoiceId,
        payment_id: &InvoicePaymentId,
        session: &Session,
    ) -> Result<InvoiceResponseDTO, ServiceError> {
        session.ensure_super_admin()?;
        let now = self.clock.now_utc();

        let invoice_repository = &self.invoice_repository;
        let payment_repository = &self.payment_repository;
        let invoice = self
            .transaction_manager
            .tx(async move {
                let invoice = lock_invoice(&**invoice_repository, invoice_id).await?;
                let payment =
                    get_invoice_payment(&**payment_repository, invoice_id, payment_id).await?;

                let update = ledger::remove_payment(&invoice, payment.amount)?;

                payment_repository.delete_payment(payment_id).await?;
                invoice_repository
                    .update_invoice(UpdateInvoiceRequest {
                        id: invoice.id,
                        last_modified: now,
                        paid_amount: Some(update.paid_amount),
                        status: Some(update.status),
                        reminder: None,
                    })
                    .await?;

                Ok::<_, ServiceError>(Invoice {
                    paid_amount: update.paid_amount,
                    status: update.status,
                    last_modified: now,
                    ..invoice
                })
            })
            .await??;

        tracing::info!(%invoice_id, %payment_id, status = %invoice.status, "Payment deleted");
        self.log_event(invoice.id, HistoryAction::PaymentDeleted, Some(session))
            .await;

        Ok(invoice.into())
    }

    /// Returns the payments of an invoice with the derived ledger summary
    ///
    /// # Arguments
    ///
    /// * `invoice_id` - id of the invoice
    /// * `session` - acting admin, must own the invoice
    pub async fn list_payments(
        &self,
        invoice_id: &InvoiceId,
        session: &Session,
    ) -> Result<InvoicePaymentListDTO, ServiceError> {
        let invoice = self
            .get_owned_invoice(invoice_id, &InvoiceRelations::default(), session)
            .await?;
        let payments = self.payment_repository.get_payment_list(invoice_id).await?;

        Ok(InvoicePaymentListDTO {
            summary: (&invoice).into(),
            payments: payments.into_iter().map(Into::into).collect(),
        })
    }

    /// Sends payment reminders for overdue invoices, returns how many were sent
    ///
    /// An invoice is reminded at most once per `interval`. When delivery fails the
    /// bookkeeping stays untouched so the next run retries.
    pub async fn send_reminders(&self, interval: Duration) -> Result<u64, ServiceError> {
        let now = self.clock.now_utc();

        let invoices = self
            .invoice_repository
            .get_invoices_for_reminder(ReminderQuery {
                due_before: now.date(),
                last_reminded_before: now - interval,
                limit: REMINDER_BATCH_SIZE,
            })
            .await?;

        let mut reminded = 0;
        for invoice in invoices {
            let Some(client) = &invoice.client else {
                tracing::warn!(invoice_id = %invoice.id, "Invoice without client, skipping reminder");
                continue;
            };

            let delivered = send_best_effort(
                &*self.notifier,
                reminder_notification(&invoice, client, &self.config.invoice.currency),
                self.config.notification.timeout,
            )
            .await;
            if !delivered {
                continue;
            }

            self.invoice_repository
                .update_invoice(UpdateInvoiceRequest {
                    id: invoice.id,
                    last_modified: now,
                    paid_amount: None,
                    status: None,
                    reminder: Some(ReminderBookkeeping {
                        last_reminder_sent_at: now,
                        reminder_count: invoice.reminder_count + 1,
                    }),
                })
                .await?;

            self.log_event(invoice.id, HistoryAction::Reminded, None)
                .await;
            reminded += 1;
        }

        if reminded > 0 {
            tracing::info!(reminded, "Invoice reminders sent");
        }

        Ok(reminded)
    }

    async fn get_owned_invoice(
        &self,
        invoice_id: &InvoiceId,
        relations: &InvoiceRelations,
        session: &Session,
    ) -> Result<Invoice, ServiceError> {
        let Some(invoice) = self
            .invoice_repository
            .get_invoice(invoice_id, relations, None)
            .await?
        else {
            return Err(EntityNotFoundError::Invoice(*invoice_id).into());
        };

        session.ensure_owner(&invoice.owner_id)?;

        Ok(invoice)
    }

    async fn notify_payment_received(&self, invoice: &Invoice, payment: &InvoicePayment) {
        let client = match self.client_repository.get_client(&invoice.client_id).await {
            Ok(Some(client)) => client,
            Ok(None) => return,
            Err(error) => {
                tracing::warn!(invoice_id = %invoice.id, "Failed to load invoice client: {error}");
                return;
            }
        };

        send_best_effort(
            &*self.notifier,
            payment_received_notification(invoice, payment, &client, &self.config.invoice.currency),
            self.config.notification.timeout,
        )
        .await;
    }

    async fn log_event(&self, invoice_id: InvoiceId, action: HistoryAction, session: Option<&Session>) {
        log_history_event(
            &*self.history_repository,
            history_event(
                invoice_id,
                HistoryEntityType::Invoice,
                action,
                session.map(|session| session.admin_id),
            ),
        )
        .await;
    }
}

/// Reads the invoice with a row lock held until the surrounding transaction ends
async fn lock_invoice(
    repository: &dyn InvoiceRepository,
    invoice_id: &InvoiceId,
) -> Result<Invoice, ServiceError> {
    repository
        .get_invoice(
            invoice_id,
            &InvoiceRelations::default(),
            Some(LockType::Update),
        )
        .await?
        .ok_or_else(|| EntityNotFoundError::Invoice(*invoice_id).into())
}

async fn get_invoice_payment(
    repository: &dyn InvoicePaymentRepository,
    invoice_id: &InvoiceId,
    payment_id: &InvoicePaymentId,
) -> Result<InvoicePayment, ServiceError> {
    let Some(payment) = repository.get_payment(payment_id).await? else {
        return Err(EntityNotFoundError::InvoicePayment(*payment_id).into());
    };

    if payment.invoice_id != *invoice_id {
        return Err(BusinessLogicError::PaymentInvoiceMismatch {
            invoice_id: *invoice_id,
            payment_id: *payment_id,
        }
        .into());
    }

    Ok(payment)
}
