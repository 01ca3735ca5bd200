//! Partner application workflow.
//!
//! Applying creates an inactive outlet plus a pending profile in one
//! transaction. Admin decisions run under a row lock and follow the
//! status state machine; approval also promotes the user's role and
//! activates the outlet.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::config::ROLE_PARTNER;
use crate::domain::{PartnerProfile, PartnerStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{
    AuditLogRepository, OutletInput, PartnerApplication, PartnerRepository, UnitOfWork,
};

/// Partner workflow operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait PartnerService: Send + Sync {
    /// Submit a partner application together with the outlet to be opened.
    async fn apply(
        &self,
        user_id: i64,
        application: PartnerApplication,
        outlet: OutletInput,
    ) -> AppResult<PartnerProfile>;

    /// The caller's own partner profile.
    async fn my_profile(&self, user_id: i64) -> AppResult<PartnerProfile>;

    /// List applications, optionally filtered by status (admin).
    async fn list_applications(
        &self,
        status: Option<PartnerStatus>,
    ) -> AppResult<Vec<PartnerProfile>>;

    /// Move an application to a new status (admin).
    async fn decide(
        &self,
        admin_id: i64,
        profile_id: i64,
        target: PartnerStatus,
    ) -> AppResult<PartnerProfile>;
}

/// Concrete implementation of PartnerService using Unit of Work.
pub struct PartnerDesk<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PartnerDesk<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PartnerService for PartnerDesk<U> {
    async fn apply(
        &self,
        user_id: i64,
        application: PartnerApplication,
        outlet: OutletInput,
    ) -> AppResult<PartnerProfile> {
        let profile = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    if ctx.partners().find_by_user(user_id).await?.is_some() {
                        return Err(AppError::conflict("Pengajuan kemitraan"));
                    }

                    // The outlet stays inactive until the application is approved
                    let outlet = ctx.outlets().create(outlet).await?;
                    ctx.partners().create(user_id, outlet.id, application).await
                })
            })
            .await?;

        tracing::info!(profile_id = profile.id, user_id, "Partner application submitted");
        Ok(profile)
    }

    async fn my_profile(&self, user_id: i64) -> AppResult<PartnerProfile> {
        PartnerRepository::new(self.uow.conn())
            .find_by_user(user_id)
            .await?
            .ok_or_not_found("Pengajuan kemitraan tidak ditemukan")
    }

    async fn list_applications(
        &self,
        status: Option<PartnerStatus>,
    ) -> AppResult<Vec<PartnerProfile>> {
        PartnerRepository::new(self.uow.conn()).list(status).await
    }

    async fn decide(
        &self,
        admin_id: i64,
        profile_id: i64,
        target: PartnerStatus,
    ) -> AppResult<PartnerProfile> {
        let profile = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let mut profile = ctx
                        .partners()
                        .find_for_update(profile_id)
                        .await?
                        .ok_or_not_found("Pengajuan kemitraan tidak ditemukan")?;

                    let next = profile.status.transition(target)?;

                    let approved_meta = match next {
                        PartnerStatus::Approved if profile.approved_at.is_none() => {
                            Some((Utc::now(), admin_id))
                        }
                        _ => None,
                    };

                    ctx.partners()
                        .set_status(profile.id, next, approved_meta)
                        .await?;

                    match next {
                        PartnerStatus::Approved => {
                            ctx.users().set_role(profile.user_id, ROLE_PARTNER).await?;
                            ctx.outlets().set_active(profile.outlet_id, true).await?;
                        }
                        PartnerStatus::Suspended => {
                            ctx.outlets().set_active(profile.outlet_id, false).await?;
                        }
                        PartnerStatus::Rejected | PartnerStatus::Pending => {}
                    }

                    profile.status = next;
                    if let Some((at, by)) = approved_meta {
                        profile.approved_at = Some(at);
                        profile.approved_by = Some(by);
                    }
                    Ok(profile)
                })
            })
            .await?;

        let audit = AuditLogRepository::new(self.uow.conn());
        if let Err(e) = audit
            .record(
                Some(admin_id),
                "partner.decision",
                "partner_profile",
                profile.id,
                Some(profile.status.as_str().to_string()),
            )
            .await
        {
            tracing::warn!(profile_id = profile.id, error = %e, "Audit write failed");
        }

        tracing::info!(
            profile_id = profile.id,
            status = %profile.status,
            "Partner application decided"
        );
        Ok(profile)
    }
}
