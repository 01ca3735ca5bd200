//! Outlet and catalog repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::{catalog_item, outlet, outlet_item};
use crate::domain::{ItemKind, Outlet, OutletItem, RatingAggregate};
use crate::errors::{AppError, AppResult};

/// Fields for creating or updating an outlet.
#[derive(Debug, Clone)]
pub struct OutletInput {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub coverage_radius_km: f64,
    pub fee_per_km: i64,
    pub minimum_fee: i64,
    pub opening_hours: Option<String>,
}

/// Fields for creating or updating a catalog entry.
#[derive(Debug, Clone)]
pub struct OutletItemInput {
    pub name: String,
    pub kind: ItemKind,
    pub price: i64,
    pub unit: String,
    pub is_active: bool,
}

/// Data access for outlets and their catalogs.
pub struct OutletRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OutletRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn list_active(&self) -> AppResult<Vec<Outlet>> {
        let models = outlet::Entity::find()
            .filter(outlet::Column::IsActive.eq(true))
            .order_by_asc(outlet::Column::Name)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(Outlet::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Outlet>> {
        let result = outlet::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Outlet::from))
    }

    /// Create an inactive outlet; activation happens through partner approval.
    pub async fn create(&self, input: OutletInput) -> AppResult<Outlet> {
        let now = Utc::now();
        let model = outlet::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            coverage_radius_km: Set(input.coverage_radius_km),
            fee_per_km: Set(input.fee_per_km),
            minimum_fee: Set(input.minimum_fee),
            opening_hours: Set(input.opening_hours),
            is_active: Set(false),
            rating_avg: Set(0.0),
            rating_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(Outlet::from(model))
    }

    pub async fn set_active(&self, id: i64, active: bool) -> AppResult<()> {
        let existing = outlet::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Outlet tidak ditemukan"))?;

        let mut model: outlet::ActiveModel = existing.into();
        model.is_active = Set(active);
        model.updated_at = Set(Utc::now());
        model.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }

    /// Overwrite the cached rating aggregate.
    pub async fn set_rating(&self, id: i64, aggregate: RatingAggregate) -> AppResult<()> {
        let existing = outlet::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Outlet tidak ditemukan"))?;

        let mut model: outlet::ActiveModel = existing.into();
        model.rating_avg = Set(aggregate.rating_avg);
        model.rating_count = Set(aggregate.rating_count);
        model.updated_at = Set(Utc::now());
        model.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    pub async fn active_items(&self, outlet_id: i64) -> AppResult<Vec<OutletItem>> {
        let models = outlet_item::Entity::find()
            .filter(outlet_item::Column::OutletId.eq(outlet_id))
            .filter(outlet_item::Column::IsActive.eq(true))
            .order_by_asc(outlet_item::Column::Name)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(OutletItem::from).collect())
    }

    pub async fn global_catalog(&self) -> AppResult<Vec<OutletItem>> {
        let models = catalog_item::Entity::find()
            .filter(catalog_item::Column::IsActive.eq(true))
            .order_by_asc(catalog_item::Column::Name)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(OutletItem::from).collect())
    }

    pub async fn create_item(&self, outlet_id: i64, input: OutletItemInput) -> AppResult<OutletItem> {
        let now = Utc::now();
        let model = outlet_item::ActiveModel {
            outlet_id: Set(outlet_id),
            name: Set(input.name),
            kind: Set(input.kind.as_str().to_string()),
            price: Set(input.price),
            unit: Set(input.unit),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(OutletItem::from(model))
    }

    pub async fn update_item(
        &self,
        id: i64,
        outlet_id: i64,
        input: OutletItemInput,
    ) -> AppResult<OutletItem> {
        let existing = outlet_item::Entity::find_by_id(id)
            .filter(outlet_item::Column::OutletId.eq(outlet_id))
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Item tidak ditemukan"))?;

        let mut active: outlet_item::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.kind = Set(input.kind.as_str().to_string());
        active.price = Set(input.price);
        active.unit = Set(input.unit);
        active.is_active = Set(input.is_active);
        active.updated_at = Set(Utc::now());

        let model = active.update(self.conn).await.map_err(AppError::from)?;
        Ok(OutletItem::from(model))
    }

    pub async fn delete_item(&self, id: i64, outlet_id: i64) -> AppResult<()> {
        let result = outlet_item::Entity::delete_many()
            .filter(outlet_item::Column::Id.eq(id))
            .filter(outlet_item::Column::OutletId.eq(outlet_id))
            .exec(self.conn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Item tidak ditemukan"));
        }
        Ok(())
    }
}
