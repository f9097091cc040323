use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::proto::clock::Clock;
use crate::proto::transaction_manager::TransactionManager;
use crate::provider::notifier::Notifier;
use crate::provider::pdf_renderer::PdfRenderer;
use crate::repository::client_repository::ClientRepository;
use crate::repository::history_repository::HistoryRepository;
use crate::repository::invoice_payment_repository::InvoicePaymentRepository;
use crate::repository::invoice_repository::InvoiceRepository;

pub mod dto;
pub mod service;

pub(crate) mod ledger;
pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct InvoiceService {
    invoice_repository: Arc<dyn InvoiceRepository>,
    payment_repository: Arc<dyn InvoicePaymentRepository>,
    client_repository: Arc<dyn ClientRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    notifier: Arc<dyn Notifier>,
    pdf_renderer: Arc<dyn PdfRenderer>,
    transaction_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
    config: Arc<CoreConfig>,
}

impl InvoiceService {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        invoice_repository: Arc<dyn InvoiceRepository>,
        payment_repository: Arc<dyn InvoicePaymentRepository>,
        client_repository: Arc<dyn ClientRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        notifier: Arc<dyn Notifier>,
        pdf_renderer: Arc<dyn PdfRenderer>,
        transaction_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            invoice_repository,
            payment_repository,
            client_repository,
            history_repository,
            notifier,
            pdf_renderer,
            transaction_manager,
            clock,
            config,
        }
    }
}
