use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct InvoiceProvider {
    pub db: TransactionManagerImpl,
}

#[cfg(test)]
mod test;
