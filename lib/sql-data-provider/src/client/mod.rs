use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct ClientProvider {
    pub db: TransactionManagerImpl,
}

#[cfg(test)]
mod test;
