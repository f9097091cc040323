use std::pin::Pin;

use async_trait::async_trait;
use futures::FutureExt;

use crate::repository::error::DataLayerError;

pub type TxFuture<'a> = Pin<Box<dyn Future<Output = Result<(), anyhow::Error>> + Send + 'a>>;

/// Runs a future inside a storage transaction.
///
/// Repositories called from within the future take part in the transaction. The transaction is
/// committed when the future resolves to `Ok` and rolled back otherwise.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn transaction(
        &self,
        future: TxFuture<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError>;
}

impl<'a> dyn TransactionManager + 'a {
    /// Typed wrapper around [`TransactionManager::transaction`]
    ///
    /// The outer result reports failures of the transaction itself (begin/commit), the inner one
    /// is the result of `future`.
    pub async fn tx<T, E>(
        &self,
        future: impl Future<Output = Result<T, E>> + Send + 'a,
    ) -> Result<Result<T, E>, DataLayerError>
    where
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut result = None;
        let boxed = async {
            result = Some(future.await?);
            Ok(())
        }
        .boxed();

        let outcome = self.transaction(boxed).await?;

        if let Err(error) = outcome {
            let error = error.downcast::<E>().map_err(|error| {
                DataLayerError::TransactionError(format!("Failed to downcast error: {error}"))
            })?;
            return Ok(Err(error));
        }

        result.map(Ok).ok_or(DataLayerError::TransactionError(
            "Failed to unpack transaction result".to_string(),
        ))
    }
}

/// Transaction manager that does _not_ provide transactions. Useful in test scenarios.
pub struct NoTransactionManager;

#[async_trait]
impl TransactionManager for NoTransactionManager {
    async fn transaction(
        &self,
        future: TxFuture<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        Ok(future.await)
    }
}
