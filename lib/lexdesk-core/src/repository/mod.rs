pub mod access_link_repository;
pub mod admin_repository;
pub mod case_repository;
pub mod client_repository;
pub mod comment_repository;
pub mod error;
pub mod history_repository;
pub mod invoice_payment_repository;
pub mod invoice_repository;

use std::sync::Arc;

use crate::proto::transaction_manager::TransactionManager;

/// Entry point of a storage backend, hands out every repository
pub trait DataRepository: Send + Sync {
    fn get_admin_repository(&self) -> Arc<dyn admin_repository::AdminRepository>;
    fn get_client_repository(&self) -> Arc<dyn client_repository::ClientRepository>;
    fn get_case_repository(&self) -> Arc<dyn case_repository::CaseRepository>;
    fn get_comment_repository(&self) -> Arc<dyn comment_repository::CommentRepository>;
    fn get_access_link_repository(&self)
    -> Arc<dyn access_link_repository::AccessLinkRepository>;
    fn get_invoice_repository(&self) -> Arc<dyn invoice_repository::InvoiceRepository>;
    fn get_invoice_payment_repository(
        &self,
    ) -> Arc<dyn invoice_payment_repository::InvoicePaymentRepository>;
    fn get_history_repository(&self) -> Arc<dyn history_repository::HistoryRepository>;
    fn get_transaction_manager(&self) -> Arc<dyn TransactionManager>;
}
