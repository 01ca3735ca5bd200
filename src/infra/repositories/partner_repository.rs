//! Partner profile repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::entities::partner_profile;
use crate::domain::{PartnerProfile, PartnerStatus};
use crate::errors::{AppError, AppResult};

/// Fields submitted with a partner application.
#[derive(Debug, Clone)]
pub struct PartnerApplication {
    pub business_name: String,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
}

/// Data access for partner profiles, bound to a connection or transaction.
pub struct PartnerRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PartnerRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Option<PartnerProfile>> {
        let result = partner_profile::Entity::find()
            .filter(partner_profile::Column::UserId.eq(user_id))
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(PartnerProfile::from))
    }

    /// Fetch by id holding a `FOR UPDATE` lock so precondition checks and the
    /// subsequent status write cannot interleave with a concurrent decision.
    pub async fn find_for_update(&self, id: i64) -> AppResult<Option<PartnerProfile>> {
        let result = partner_profile::Entity::find_by_id(id)
            .lock_exclusive()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(PartnerProfile::from))
    }

    pub async fn list(&self, status: Option<PartnerStatus>) -> AppResult<Vec<PartnerProfile>> {
        let mut query = partner_profile::Entity::find();
        if let Some(status) = status {
            query = query.filter(partner_profile::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(partner_profile::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(PartnerProfile::from).collect())
    }

    pub async fn create(
        &self,
        user_id: i64,
        outlet_id: i64,
        application: PartnerApplication,
    ) -> AppResult<PartnerProfile> {
        let now = Utc::now();
        let model = partner_profile::ActiveModel {
            user_id: Set(user_id),
            outlet_id: Set(outlet_id),
            status: Set(PartnerStatus::Pending.as_str().to_string()),
            business_name: Set(application.business_name),
            bank_name: Set(application.bank_name),
            bank_account: Set(application.bank_account),
            approved_at: Set(None),
            approved_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(PartnerProfile::from(model))
    }

    /// Write a new status; approval metadata is set only on approve.
    pub async fn set_status(
        &self,
        id: i64,
        status: PartnerStatus,
        approved: Option<(DateTime<Utc>, i64)>,
    ) -> AppResult<()> {
        let existing = partner_profile::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Pengajuan kemitraan tidak ditemukan"))?;

        let mut active: partner_profile::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        if let Some((at, by)) = approved {
            active.approved_at = Set(Some(at));
            active.approved_by = Set(Some(by));
        }
        active.updated_at = Set(Utc::now());
        active.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }
}
