use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct AdminProvider {
    pub db: TransactionManagerImpl,
}
