use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct AccessLinkProvider {
    pub db: TransactionManagerImpl,
}
