use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct HistoryProvider {
    pub db: TransactionManagerImpl,
}

#[cfg(test)]
mod test;
