use crate::transaction_context::TransactionManagerImpl;

mod mapper;
mod repository;

pub(crate) struct InvoicePaymentProvider {
    pub db: TransactionManagerImpl,
}

#[cfg(test)]
mod test;
