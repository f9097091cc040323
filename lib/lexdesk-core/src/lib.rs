#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::ConfigError;
use config::core_config::CoreConfig;
use proto::clock::{Clock, SystemClock};
use provider::capability_token::HmacCapabilityTokenProvider;
use provider::notifier::{Notifier, notifier_from_config};
use provider::pdf_renderer::{PdfRenderer, pdf_renderer_from_config};
use provider::pin::Pbkdf2PinProvider;
use provider::task::provider::TaskProviderImpl;
use provider::task::tasks_from_config;
use repository::DataRepository;
use secrecy::SecretSlice;
use service::access_link::AccessLinkService;
use service::admin::AdminService;
use service::case::CaseService;
use service::client::ClientService;
use service::history::HistoryService;
use service::invoice::InvoiceService;
use service::task::TaskService;

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod repository;
pub mod service;

pub(crate) mod util;

/// All services of the practice-management core, wired to one storage backend
#[derive(Clone)]
pub struct LexdeskCore {
    pub access_link_service: AccessLinkService,
    pub admin_service: AdminService,
    pub case_service: CaseService,
    pub client_service: ClientService,
    pub history_service: HistoryService,
    pub invoice_service: InvoiceService,
    pub task_service: TaskService,
}

pub struct LexdeskCoreBuilder {
    config: CoreConfig,
    data_repository: Option<Arc<dyn DataRepository>>,
    capability_token_key: Option<SecretSlice<u8>>,
    clock: Arc<dyn Clock>,
    notifier: Option<Arc<dyn Notifier>>,
    pdf_renderer: Option<Arc<dyn PdfRenderer>>,
}

impl LexdeskCoreBuilder {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            data_repository: None,
            capability_token_key: None,
            clock: Arc::new(SystemClock),
            notifier: None,
            pdf_renderer: None,
        }
    }

    pub fn with_data_repository(mut self, data_repository: Arc<dyn DataRepository>) -> Self {
        self.data_repository = Some(data_repository);
        self
    }

    /// Key signing the capability tokens handed out by `verify`
    pub fn with_capability_token_key(mut self, key: SecretSlice<u8>) -> Self {
        self.capability_token_key = Some(key);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Overrides the notifier built from the `notification` config section
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Overrides the renderer built from the `pdf` config section
    pub fn with_pdf_renderer(mut self, pdf_renderer: Arc<dyn PdfRenderer>) -> Self {
        self.pdf_renderer = Some(pdf_renderer);
        self
    }

    pub fn build(self) -> Result<LexdeskCore, ConfigError> {
        let data_repository = self.data_repository.ok_or_else(|| {
            config::ConfigValidationError::EntryNotFound("dataRepository".to_owned())
        })?;
        let capability_token_key = self.capability_token_key.ok_or_else(|| {
            config::ConfigValidationError::EntryNotFound("capabilityTokenKey".to_owned())
        })?;

        let notifier = match self.notifier {
            Some(notifier) => notifier,
            None => notifier_from_config(&self.config.notification)?,
        };
        let pdf_renderer = match self.pdf_renderer {
            Some(pdf_renderer) => pdf_renderer,
            None => pdf_renderer_from_config(&self.config.pdf)?,
        };

        let config = Arc::new(self.config);
        let clock = self.clock;
        let transaction_manager = data_repository.get_transaction_manager();
        let history_repository = data_repository.get_history_repository();

        let access_link_service = AccessLinkService::new(
            data_repository.get_access_link_repository(),
            data_repository.get_case_repository(),
            data_repository.get_comment_repository(),
            data_repository.get_admin_repository(),
            history_repository.clone(),
            Arc::new(Pbkdf2PinProvider::new(
                config.access_link.pin_length,
                config.access_link.hash_rounds,
            )),
            Arc::new(HmacCapabilityTokenProvider::new(capability_token_key)),
            notifier.clone(),
            transaction_manager.clone(),
            clock.clone(),
            config.clone(),
        );

        let invoice_service = InvoiceService::new(
            data_repository.get_invoice_repository(),
            data_repository.get_invoice_payment_repository(),
            data_repository.get_client_repository(),
            history_repository.clone(),
            notifier,
            pdf_renderer,
            transaction_manager,
            clock.clone(),
            config.clone(),
        );

        let tasks = tasks_from_config(
            &config.task,
            access_link_service.clone(),
            invoice_service.clone(),
        )?;
        let task_service = TaskService::new(Arc::new(TaskProviderImpl::new(tasks, &config.task)));

        Ok(LexdeskCore {
            admin_service: AdminService::new(
                data_repository.get_admin_repository(),
                history_repository.clone(),
                clock.clone(),
            ),
            client_service: ClientService::new(
                data_repository.get_client_repository(),
                history_repository.clone(),
                clock.clone(),
            ),
            case_service: CaseService::new(
                data_repository.get_case_repository(),
                data_repository.get_client_repository(),
                data_repository.get_comment_repository(),
                history_repository.clone(),
                clock,
            ),
            history_service: HistoryService::new(history_repository),
            access_link_service,
            invoice_service,
            task_service,
        })
    }
}
