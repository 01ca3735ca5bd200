//! Payment repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect, Set,
};

use super::entities::payment;
use crate::domain::{Payment, PaymentStatus};
use crate::errors::{AppError, AppResult};

/// Data access for mock payments, bound to a connection or transaction.
pub struct PaymentRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert a pending payment attempt for an order.
    pub async fn create(
        &self,
        order_id: i64,
        amount: i64,
        transaction_token: String,
        redirect_url: String,
    ) -> AppResult<Payment> {
        let model = payment::ActiveModel {
            order_id: Set(order_id),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            amount: Set(amount),
            transaction_token: Set(transaction_token),
            redirect_url: Set(redirect_url),
            paid_at: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(Payment::from(model))
    }

    /// Fetch by token holding a `FOR UPDATE` lock, so two concurrent
    /// confirmations of the same token serialize on the row.
    pub async fn find_by_token_for_update(&self, token: &str) -> AppResult<Option<Payment>> {
        let result = payment::Entity::find()
            .filter(payment::Column::TransactionToken.eq(token))
            .lock_exclusive()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Payment::from))
    }

    pub async fn mark_paid(&self, id: i64, paid_at: DateTime<Utc>) -> AppResult<()> {
        let existing = payment::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Pembayaran tidak ditemukan"))?;

        let mut active: payment::ActiveModel = existing.into();
        active.status = Set(PaymentStatus::Paid.as_str().to_string());
        active.paid_at = Set(Some(paid_at));
        active.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }
}
