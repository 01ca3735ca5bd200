//! Status timeline and audit-log repositories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::{audit_log, order_status_log};
use crate::domain::{OrderStatus, StatusLogEntry};
use crate::errors::{AppError, AppResult};

/// Data access for the append-only order timeline.
pub struct StatusLogRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> StatusLogRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Append a timeline entry; rows are never updated or deleted.
    pub async fn append(
        &self,
        order_id: i64,
        status: OrderStatus,
        note: Option<String>,
    ) -> AppResult<StatusLogEntry> {
        let model = order_status_log::ActiveModel {
            order_id: Set(order_id),
            status: Set(status.as_str().to_string()),
            note: Set(note),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(StatusLogEntry::from(model))
    }

    /// Timeline entries for an order, oldest first.
    pub async fn timeline(&self, order_id: i64) -> AppResult<Vec<StatusLogEntry>> {
        let models = order_status_log::Entity::find()
            .filter(order_status_log::Column::OrderId.eq(order_id))
            .order_by_asc(order_status_log::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(StatusLogEntry::from).collect())
    }
}

/// Best-effort audit trail; callers log and swallow failures so an audit
/// write never fails the request that produced it.
pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn record(
        &self,
        actor_id: Option<i64>,
        action: &str,
        entity: &str,
        entity_id: i64,
        detail: Option<String>,
    ) -> AppResult<()> {
        audit_log::ActiveModel {
            actor_id: Set(actor_id),
            action: Set(action.to_string()),
            entity: Set(entity.to_string()),
            entity_id: Set(entity_id),
            detail: Set(detail),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }
}
