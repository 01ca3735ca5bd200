//! Outlet directory and catalog service.
//!
//! Outlet detail resolves the displayed catalog in one place: the outlet's
//! own active items when it has any, otherwise the global catalog.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CatalogSource, Outlet, OutletDetail, OutletItem, PartnerStatus, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{OutletItemInput, OutletRepository, PartnerRepository, UnitOfWork};

/// Outlet and catalog operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait OutletService: Send + Sync {
    /// Publicly visible (active) outlets.
    async fn list_outlets(&self) -> AppResult<Vec<Outlet>>;

    /// Outlet detail with its resolved catalog.
    async fn outlet_detail(&self, outlet_id: i64) -> AppResult<OutletDetail>;

    /// Add a catalog item to an outlet the caller manages.
    async fn create_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        input: OutletItemInput,
    ) -> AppResult<OutletItem>;

    /// Update a catalog item on an outlet the caller manages.
    async fn update_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        item_id: i64,
        input: OutletItemInput,
    ) -> AppResult<OutletItem>;

    /// Remove a catalog item from an outlet the caller manages.
    async fn delete_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        item_id: i64,
    ) -> AppResult<()>;
}

/// Concrete implementation of OutletService using Unit of Work.
pub struct OutletDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OutletDirectory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Admins manage any outlet; partners only the outlet on their approved
    /// profile.
    async fn authorize_manager(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
    ) -> AppResult<()> {
        if role.is_admin() {
            return Ok(());
        }

        let profile = PartnerRepository::new(self.uow.conn())
            .find_by_user(user_id)
            .await?;

        match profile {
            Some(p) if p.outlet_id == outlet_id && p.status == PartnerStatus::Approved => Ok(()),
            _ => Err(AppError::Forbidden),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> OutletService for OutletDirectory<U> {
    async fn list_outlets(&self) -> AppResult<Vec<Outlet>> {
        OutletRepository::new(self.uow.conn()).list_active().await
    }

    async fn outlet_detail(&self, outlet_id: i64) -> AppResult<OutletDetail> {
        let repo = OutletRepository::new(self.uow.conn());
        let outlet = repo
            .find_by_id(outlet_id)
            .await?
            .ok_or_not_found("Outlet tidak ditemukan")?;

        let own_items = repo.active_items(outlet.id).await?;
        let (catalog_source, items) = if own_items.is_empty() {
            (CatalogSource::Global, repo.global_catalog().await?)
        } else {
            (CatalogSource::Outlet, own_items)
        };

        Ok(OutletDetail {
            outlet,
            catalog_source,
            items,
        })
    }

    async fn create_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        input: OutletItemInput,
    ) -> AppResult<OutletItem> {
        self.authorize_manager(user_id, role, outlet_id).await?;

        let repo = OutletRepository::new(self.uow.conn());
        repo.find_by_id(outlet_id)
            .await?
            .ok_or_not_found("Outlet tidak ditemukan")?;
        repo.create_item(outlet_id, input).await
    }

    async fn update_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        item_id: i64,
        input: OutletItemInput,
    ) -> AppResult<OutletItem> {
        self.authorize_manager(user_id, role, outlet_id).await?;

        OutletRepository::new(self.uow.conn())
            .update_item(item_id, outlet_id, input)
            .await
    }

    async fn delete_item(
        &self,
        user_id: i64,
        role: UserRole,
        outlet_id: i64,
        item_id: i64,
    ) -> AppResult<()> {
        self.authorize_manager(user_id, role, outlet_id).await?;

        OutletRepository::new(self.uow.conn())
            .delete_item(item_id, outlet_id)
            .await
    }
}
