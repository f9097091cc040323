#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use lexdesk_core::proto::transaction_manager::TransactionManager;
use lexdesk_core::repository::DataRepository;
use lexdesk_core::repository::access_link_repository::AccessLinkRepository;
use lexdesk_core::repository::admin_repository::AdminRepository;
use lexdesk_core::repository::case_repository::CaseRepository;
use lexdesk_core::repository::client_repository::ClientRepository;
use lexdesk_core::repository::comment_repository::CommentRepository;
use lexdesk_core::repository::history_repository::HistoryRepository;
use lexdesk_core::repository::invoice_payment_repository::InvoicePaymentRepository;
use lexdesk_core::repository::invoice_repository::InvoiceRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

use crate::access_link::AccessLinkProvider;
use crate::admin::AdminProvider;
use crate::case::CaseProvider;
use crate::client::ClientProvider;
use crate::comment::CommentProvider;
use crate::history::HistoryProvider;
use crate::invoice::InvoiceProvider;
use crate::invoice_payment::InvoicePaymentProvider;
use crate::transaction_context::TransactionManagerImpl;

mod common;
mod entity;
mod mapper;

pub mod transaction_context;

mod access_link;
mod admin;
mod case;
mod client;
mod comment;
mod history;
mod invoice;
mod invoice_payment;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    transaction_manager: Arc<TransactionManagerImpl>,
    access_link_repository: Arc<dyn AccessLinkRepository>,
    admin_repository: Arc<dyn AdminRepository>,
    case_repository: Arc<dyn CaseRepository>,
    client_repository: Arc<dyn ClientRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    invoice_repository: Arc<dyn InvoiceRepository>,
    invoice_payment_repository: Arc<dyn InvoicePaymentRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let transaction_manager = TransactionManagerImpl::new(db.clone());

        Self {
            access_link_repository: Arc::new(AccessLinkProvider {
                db: transaction_manager.clone(),
            }),
            admin_repository: Arc::new(AdminProvider {
                db: transaction_manager.clone(),
            }),
            case_repository: Arc::new(CaseProvider {
                db: transaction_manager.clone(),
            }),
            client_repository: Arc::new(ClientProvider {
                db: transaction_manager.clone(),
            }),
            comment_repository: Arc::new(CommentProvider {
                db: transaction_manager.clone(),
            }),
            history_repository: Arc::new(HistoryProvider {
                db: transaction_manager.clone(),
            }),
            invoice_repository: Arc::new(InvoiceProvider {
                db: transaction_manager.clone(),
            }),
            invoice_payment_repository: Arc::new(InvoicePaymentProvider {
                db: transaction_manager.clone(),
            }),
            transaction_manager: Arc::new(transaction_manager),
            db,
        }
    }
}

/// Connects to the database, optionally bringing the schema up to date
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DbConn, DbErr> {
    let db = sea_orm::Database::connect(ConnectOptions::new(database_url)).await?;

    if run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_admin_repository(&self) -> Arc<dyn AdminRepository> {
        self.admin_repository.clone()
    }

    fn get_client_repository(&self) -> Arc<dyn ClientRepository> {
        self.client_repository.clone()
    }

    fn get_case_repository(&self) -> Arc<dyn CaseRepository> {
        self.case_repository.clone()
    }

    fn get_comment_repository(&self) -> Arc<dyn CommentRepository> {
        self.comment_repository.clone()
    }

    fn get_access_link_repository(&self) -> Arc<dyn AccessLinkRepository> {
        self.access_link_repository.clone()
    }

    fn get_invoice_repository(&self) -> Arc<dyn InvoiceRepository> {
        self.invoice_repository.clone()
    }

    fn get_invoice_payment_repository(&self) -> Arc<dyn InvoicePaymentRepository> {
        self.invoice_payment_repository.clone()
    }

    fn get_history_repository(&self) -> Arc<dyn HistoryRepository> {
        self.history_repository.clone()
    }

    fn get_transaction_manager(&self) -> Arc<dyn TransactionManager> {
        self.transaction_manager.clone()
    }
}
