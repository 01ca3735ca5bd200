//! Order status timeline service.
//!
//! Staff push tracking stages through an append-only log; the order row
//! mirrors the latest stage. Customers read their own timeline; admins can
//! read any.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{OrderStatus, StatusLogEntry};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{AuditLogRepository, Notifier, OrderRepository, StatusLogRepository, UnitOfWork};

/// Timeline operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait StatusService: Send + Sync {
    /// Append a tracking stage to an order's timeline.
    ///
    /// The stage must be one of the fixed tracking values; lifecycle
    /// statuses (`pending`, `paid`, `completed`) are written by their own
    /// flows and rejected here.
    async fn push_status(
        &self,
        actor_id: i64,
        order_id: i64,
        status: String,
        note: Option<String>,
    ) -> AppResult<StatusLogEntry>;

    /// Mark an order completed, enabling review.
    async fn complete_order(&self, actor_id: i64, order_id: i64) -> AppResult<StatusLogEntry>;

    /// Timeline for one of the user's own orders, oldest first.
    async fn timeline(&self, user_id: i64, order_id: i64) -> AppResult<Vec<StatusLogEntry>>;

    /// Timeline for any order (admin).
    async fn timeline_any(&self, order_id: i64) -> AppResult<Vec<StatusLogEntry>>;
}

/// Concrete implementation of StatusService using Unit of Work.
pub struct StatusTimeline<U: UnitOfWork> {
    uow: Arc<U>,
    notifier: Notifier,
}

impl<U: UnitOfWork> StatusTimeline<U> {
    pub fn new(uow: Arc<U>, notifier: Notifier) -> Self {
        Self { uow, notifier }
    }

    /// Append `status` under a row lock and mirror it onto the order.
    async fn append_status(
        &self,
        actor_id: i64,
        order_id: i64,
        status: OrderStatus,
        note: Option<String>,
    ) -> AppResult<StatusLogEntry> {
        let entry = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let order = ctx
                        .orders()
                        .find_for_update(order_id)
                        .await?
                        .ok_or_not_found("Order tidak ditemukan")?;

                    let entry = ctx.status_logs().append(order.id, status, note).await?;
                    ctx.orders().set_status(order.id, status).await?;
                    Ok(entry)
                })
            })
            .await?;

        // Audit and webhook are best-effort, outside the transaction
        let audit = AuditLogRepository::new(self.uow.conn());
        if let Err(e) = audit
            .record(
                Some(actor_id),
                "order.status",
                "order",
                order_id,
                Some(status.as_str().to_string()),
            )
            .await
        {
            tracing::warn!(order_id, error = %e, "Audit write failed");
        }

        self.notifier
            .order_status_changed(order_id, status, entry.note.as_deref())
            .await;

        tracing::info!(order_id, status = %status, "Order status updated");
        Ok(entry)
    }
}

#[async_trait]
impl<U: UnitOfWork> StatusService for StatusTimeline<U> {
    async fn push_status(
        &self,
        actor_id: i64,
        order_id: i64,
        status: String,
        note: Option<String>,
    ) -> AppResult<StatusLogEntry> {
        let status = OrderStatus::parse_tracking_stage(&status)?;
        self.append_status(actor_id, order_id, status, note).await
    }

    async fn complete_order(&self, actor_id: i64, order_id: i64) -> AppResult<StatusLogEntry> {
        self.append_status(actor_id, order_id, OrderStatus::Completed, None)
            .await
    }

    async fn timeline(&self, user_id: i64, order_id: i64) -> AppResult<Vec<StatusLogEntry>> {
        let orders = OrderRepository::new(self.uow.conn());
        orders
            .find_owned(order_id, user_id)
            .await?
            .ok_or_not_found("Order tidak ditemukan")?;

        StatusLogRepository::new(self.uow.conn())
            .timeline(order_id)
            .await
    }

    async fn timeline_any(&self, order_id: i64) -> AppResult<Vec<StatusLogEntry>> {
        let orders = OrderRepository::new(self.uow.conn());
        orders
            .find_by_id(order_id)
            .await?
            .ok_or_not_found("Order tidak ditemukan")?;

        StatusLogRepository::new(self.uow.conn())
            .timeline(order_id)
            .await
    }
}
