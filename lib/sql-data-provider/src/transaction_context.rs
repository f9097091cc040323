use std::sync::Arc;

use async_trait::async_trait;
use lexdesk_core::proto::transaction_manager::{TransactionManager, TxFuture};
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, ExecResult,
    QueryResult, Statement, TransactionTrait,
};

use crate::mapper::to_data_layer_error;

tokio::task_local! {
    static CURRENT_TRANSACTION: Arc<DatabaseTransaction>;
}

/// Hands out the connection repositories run their statements on.
///
/// Inside [`TransactionManager::transaction`] every repository call of the running task goes
/// through the same open transaction, outside of it statements run directly on the pool.
#[derive(Clone)]
pub struct TransactionManagerImpl {
    db: DatabaseConnection,
}

impl TransactionManagerImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn tx(&self) -> TransactionWrapper {
        match CURRENT_TRANSACTION.try_with(Arc::clone) {
            Ok(transaction) => TransactionWrapper::Transaction(transaction),
            Err(_) => TransactionWrapper::Connection(self.db.clone()),
        }
    }
}

#[async_trait]
impl TransactionManager for TransactionManagerImpl {
    async fn transaction(
        &self,
        future: TxFuture<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        // nested calls join the transaction already running
        if CURRENT_TRANSACTION.try_with(|_| ()).is_ok() {
            return Ok(future.await);
        }

        let transaction = self.db.begin().await.map_err(to_data_layer_error)?;
        let transaction = Arc::new(transaction);

        let result = CURRENT_TRANSACTION
            .scope(transaction.clone(), future)
            .await;

        let transaction = Arc::try_unwrap(transaction).map_err(|_| {
            DataLayerError::TransactionError("Transaction still in use after completion".to_owned())
        })?;

        match &result {
            Ok(()) => transaction.commit().await,
            Err(error) => {
                tracing::debug!(%error, "Rolling back transaction");
                transaction.rollback().await
            }
        }
        .map_err(|error| DataLayerError::TransactionError(error.to_string()))?;

        Ok(result)
    }
}

pub enum TransactionWrapper {
    Connection(DatabaseConnection),
    Transaction(Arc<DatabaseTransaction>),
}

#[async_trait]
impl ConnectionTrait for TransactionWrapper {
    fn get_database_backend(&self) -> DbBackend {
        match self {
            Self::Connection(connection) => connection.get_database_backend(),
            Self::Transaction(transaction) => transaction.get_database_backend(),
        }
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(connection) => connection.execute(stmt).await,
            Self::Transaction(transaction) => transaction.execute(stmt).await,
        }
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(connection) => connection.execute_unprepared(sql).await,
            Self::Transaction(transaction) => transaction.execute_unprepared(sql).await,
        }
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        match self {
            Self::Connection(connection) => connection.query_one(stmt).await,
            Self::Transaction(transaction) => transaction.query_one(stmt).await,
        }
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        match self {
            Self::Connection(connection) => connection.query_all(stmt).await,
            Self::Transaction(transaction) => transaction.query_all(stmt).await,
        }
    }

    fn support_returning(&self) -> bool {
        match self {
            Self::Connection(connection) => connection.support_returning(),
            Self::Transaction(transaction) => transaction.support_returning(),
        }
    }
}
