//! User repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Data access for users, bound to a connection or transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(User::from))
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(User::from))
    }

    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        phone: Option<String>,
        role: String,
    ) -> AppResult<User> {
        let now = Utc::now();
        let model = user::ActiveModel {
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            phone: Set(phone),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(User::from(model))
    }

    /// Overwrite the user's role (used when a partner application is approved).
    pub async fn set_role(&self, id: i64, role: &str) -> AppResult<()> {
        let existing = UserEntity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("User tidak ditemukan"))?;

        let mut active: user::ActiveModel = existing.into();
        active.role = Set(role.to_string());
        active.updated_at = Set(Utc::now());
        active.update(self.conn).await.map_err(AppError::from)?;
        Ok(())
    }
}
