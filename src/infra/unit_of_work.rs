//! Unit of Work pattern implementation.
//!
//! Centralizes transaction lifecycle management: a service runs a closure
//! against a [`TransactionContext`], and the transaction commits on success or
//! rolls back on error. Repositories obtained from the context share the same
//! transaction, so multi-statement sequences (order + lines, payment
//! confirmation + order update, partner approval across three tables) are
//! atomic.

use async_trait::async_trait;
use futures::future::BoxFuture;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

use super::repositories::{
    AddressRepository, OrderRepository, OutletRepository, PartnerRepository, PaymentRepository,
    ReviewRepository, StatusLogRepository, UserRepository,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: the generic `transaction` method makes this trait unmockable with
/// mockall; tests mock at the service level instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get the underlying connection for single-statement reads.
    fn conn(&self) -> &DatabaseConnection;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled back
    /// on error. Uses ReadCommitted isolation; row-level `FOR UPDATE` locks
    /// inside the closure provide the stronger guarantees where needed.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> UserRepository<'_, DatabaseTransaction> {
        UserRepository::new(self.txn)
    }

    pub fn orders(&self) -> OrderRepository<'_, DatabaseTransaction> {
        OrderRepository::new(self.txn)
    }

    pub fn payments(&self) -> PaymentRepository<'_, DatabaseTransaction> {
        PaymentRepository::new(self.txn)
    }

    pub fn status_logs(&self) -> StatusLogRepository<'_, DatabaseTransaction> {
        StatusLogRepository::new(self.txn)
    }

    pub fn addresses(&self) -> AddressRepository<'_, DatabaseTransaction> {
        AddressRepository::new(self.txn)
    }

    pub fn outlets(&self) -> OutletRepository<'_, DatabaseTransaction> {
        OutletRepository::new(self.txn)
    }

    pub fn partners(&self) -> PartnerRepository<'_, DatabaseTransaction> {
        PartnerRepository::new(self.txn)
    }

    pub fn reviews(&self) -> ReviewRepository<'_, DatabaseTransaction> {
        ReviewRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork over the SeaORM connection pool.
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recover the connection, used by tests to inspect the mock
    /// transaction log.
    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DatabaseConnection {
        self.db
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
