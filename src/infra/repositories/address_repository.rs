//! Address repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::entities::address;
use crate::domain::Address;
use crate::errors::{AppError, AppResult};

/// Fields for creating or updating an address.
#[derive(Debug, Clone)]
pub struct AddressInput {
    pub label: String,
    pub recipient_name: String,
    pub phone: String,
    pub full_address: String,
    pub note: Option<String>,
    pub is_default: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Data access for pickup addresses, bound to a connection or transaction.
pub struct AddressRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<Address>> {
        let models = address::Entity::find()
            .filter(address::Column::UserId.eq(user_id))
            .order_by_desc(address::Column::IsDefault)
            .order_by_desc(address::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(Address::from).collect())
    }

    /// Ownership-checked fetch holding a `FOR UPDATE` lock, used when an
    /// update may toggle the default flag.
    pub async fn find_owned_for_update(&self, id: i64, user_id: i64) -> AppResult<Option<Address>> {
        let result = address::Entity::find_by_id(id)
            .filter(address::Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Address::from))
    }

    /// Clear the default flag on all of the user's addresses. Runs in the
    /// same transaction as the write that sets a new default, keeping the
    /// at-most-one-default invariant.
    pub async fn clear_defaults(&self, user_id: i64) -> AppResult<()> {
        address::Entity::update_many()
            .col_expr(address::Column::IsDefault, sea_orm::sea_query::Expr::value(false))
            .filter(address::Column::UserId.eq(user_id))
            .filter(address::Column::IsDefault.eq(true))
            .exec(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub async fn create(&self, user_id: i64, input: AddressInput) -> AppResult<Address> {
        let now = Utc::now();
        let model = address::ActiveModel {
            user_id: Set(user_id),
            label: Set(input.label),
            recipient_name: Set(input.recipient_name),
            phone: Set(input.phone),
            full_address: Set(input.full_address),
            note: Set(input.note),
            is_default: Set(input.is_default),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(Address::from(model))
    }

    pub async fn update(&self, id: i64, user_id: i64, input: AddressInput) -> AppResult<Address> {
        let existing = address::Entity::find_by_id(id)
            .filter(address::Column::UserId.eq(user_id))
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Alamat tidak ditemukan"))?;

        let mut active: address::ActiveModel = existing.into();
        active.label = Set(input.label);
        active.recipient_name = Set(input.recipient_name);
        active.phone = Set(input.phone);
        active.full_address = Set(input.full_address);
        active.note = Set(input.note);
        active.is_default = Set(input.is_default);
        active.latitude = Set(input.latitude);
        active.longitude = Set(input.longitude);
        active.updated_at = Set(Utc::now());

        let model = active.update(self.conn).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<()> {
        let result = address::Entity::delete_many()
            .filter(address::Column::Id.eq(id))
            .filter(address::Column::UserId.eq(user_id))
            .exec(self.conn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Alamat tidak ditemukan"));
        }
        Ok(())
    }
}
