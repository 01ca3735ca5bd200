//! Review repository and rating aggregation.

use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::review;
use crate::domain::{RatingAggregate, Review};
use crate::errors::{AppError, AppResult};

#[derive(FromQueryResult)]
struct RatingRow {
    rating_avg: Option<f64>,
    rating_count: i64,
}

/// Data access for reviews, bound to a connection or transaction.
pub struct ReviewRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Option<Review>> {
        let result = review::Entity::find()
            .filter(review::Column::OrderId.eq(order_id))
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Review::from))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Review>> {
        let result = review::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(result.map(Review::from))
    }

    pub async fn list_for_outlet(&self, outlet_id: i64) -> AppResult<Vec<Review>> {
        let models = review::Entity::find()
            .filter(review::Column::OutletId.eq(outlet_id))
            .order_by_desc(review::Column::CreatedAt)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;
        Ok(models.into_iter().map(Review::from).collect())
    }

    pub async fn create(
        &self,
        order_id: i64,
        outlet_id: i64,
        user_id: i64,
        rating: i32,
        comment: Option<String>,
    ) -> AppResult<Review> {
        let model = review::ActiveModel {
            order_id: Set(order_id),
            outlet_id: Set(outlet_id),
            user_id: Set(user_id),
            rating: Set(rating),
            comment: Set(comment),
            reply: Set(None),
            replied_at: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(Review::from(model))
    }

    /// Recompute AVG(rating)/COUNT(*) over all of the outlet's reviews.
    pub async fn aggregate_for_outlet(&self, outlet_id: i64) -> AppResult<RatingAggregate> {
        let row = review::Entity::find()
            .select_only()
            .column_as(
                Func::avg(Expr::col(review::Column::Rating))
                    .cast_as(Alias::new("double precision")),
                "rating_avg",
            )
            .column_as(Expr::col(review::Column::Id).count(), "rating_count")
            .filter(review::Column::OutletId.eq(outlet_id))
            .into_model::<RatingRow>()
            .one(self.conn)
            .await
            .map_err(AppError::from)?;

        let row = row.unwrap_or(RatingRow {
            rating_avg: None,
            rating_count: 0,
        });

        Ok(RatingAggregate {
            rating_avg: row.rating_avg.unwrap_or(0.0),
            rating_count: row.rating_count,
        })
    }

    /// Set the partner reply on a review.
    pub async fn reply(&self, id: i64, reply: String) -> AppResult<Review> {
        let existing = review::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::not_found("Review tidak ditemukan"))?;

        let mut active: review::ActiveModel = existing.into();
        active.reply = Set(Some(reply));
        active.replied_at = Set(Some(Utc::now()));

        let model = active.update(self.conn).await.map_err(AppError::from)?;
        Ok(Review::from(model))
    }
}
