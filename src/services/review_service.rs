//! Review service.
//!
//! A review requires a completed order owned by the caller, at most one per
//! order. The order row is locked during creation, so a double submit
//! serializes and the second attempt sees the existing review; the unique
//! index on `reviews.order_id` backstops the check. The outlet's cached
//! rating aggregate is recomputed in the same transaction.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use crate::domain::{OrderStatus, PartnerStatus, Review, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{PartnerRepository, ReviewRepository, UnitOfWork};

/// Review operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Create a review for one of the caller's completed orders.
    async fn create_review(
        &self,
        user_id: i64,
        order_id: i64,
        rating: i32,
        comment: Option<String>,
    ) -> AppResult<Review>;

    /// Public reviews for an outlet, newest first.
    async fn list_for_outlet(&self, outlet_id: i64) -> AppResult<Vec<Review>>;

    /// Reply to a review as the outlet's partner or an admin.
    async fn reply(
        &self,
        user_id: i64,
        role: UserRole,
        review_id: i64,
        reply: String,
    ) -> AppResult<Review>;
}

/// Concrete implementation of ReviewService using Unit of Work.
pub struct Reviews<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Reviews<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReviewService for Reviews<U> {
    async fn create_review(
        &self,
        user_id: i64,
        order_id: i64,
        rating: i32,
        comment: Option<String>,
    ) -> AppResult<Review> {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&rating) {
            return Err(AppError::validation("Rating harus antara 1 sampai 5"));
        }

        let review = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let order = ctx
                        .orders()
                        .find_owned_for_update(order_id, user_id)
                        .await?
                        .ok_or_not_found("Order tidak ditemukan")?;

                    if order.status != OrderStatus::Completed {
                        return Err(AppError::validation(
                            "Hanya pesanan yang selesai yang dapat di-review",
                        ));
                    }

                    if ctx.reviews().find_by_order(order.id).await?.is_some() {
                        return Err(AppError::validation("Pesanan ini sudah di-review"));
                    }

                    let outlet_id = order.outlet_id.ok_or_else(|| {
                        AppError::validation("Pesanan tidak terkait dengan outlet")
                    })?;

                    let review = ctx
                        .reviews()
                        .create(order.id, outlet_id, user_id, rating, comment)
                        .await?;

                    let aggregate = ctx.reviews().aggregate_for_outlet(outlet_id).await?;
                    ctx.outlets().set_rating(outlet_id, aggregate).await?;

                    Ok(review)
                })
            })
            .await?;

        tracing::info!(
            review_id = review.id,
            order_id = review.order_id,
            rating = review.rating,
            "Review created"
        );
        Ok(review)
    }

    async fn list_for_outlet(&self, outlet_id: i64) -> AppResult<Vec<Review>> {
        ReviewRepository::new(self.uow.conn())
            .list_for_outlet(outlet_id)
            .await
    }

    async fn reply(
        &self,
        user_id: i64,
        role: UserRole,
        review_id: i64,
        reply: String,
    ) -> AppResult<Review> {
        let repo = ReviewRepository::new(self.uow.conn());
        let review = repo
            .find_by_id(review_id)
            .await?
            .ok_or_not_found("Review tidak ditemukan")?;

        if !role.is_admin() {
            let profile = PartnerRepository::new(self.uow.conn())
                .find_by_user(user_id)
                .await?;
            let owns_outlet = matches!(
                profile,
                Some(p) if p.outlet_id == review.outlet_id && p.status == PartnerStatus::Approved
            );
            if !owns_outlet {
                return Err(AppError::Forbidden);
            }
        }

        repo.reply(review.id, reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    use crate::infra::repositories::entities::{order, review};
    use crate::infra::Persistence;

    fn completed_order(id: i64, user_id: i64) -> order::Model {
        let now = Utc::now();
        order::Model {
            id,
            user_id,
            outlet_id: Some(3),
            address_id: None,
            subtotal: 50_000,
            tax_amount: 5_000,
            delivery_fee: 0,
            total: 55_000,
            status: "completed".to_string(),
            payment_status: "paid".to_string(),
            payment_method: Some("qris".to_string()),
            invoice_number: Some("INV-000005".to_string()),
            pickup_slot: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn existing_review(order_id: i64, user_id: i64) -> review::Model {
        review::Model {
            id: 1,
            order_id,
            outlet_id: 3,
            user_id,
            rating: 5,
            comment: None,
            reply: None,
            replied_at: None,
            created_at: Utc::now(),
        }
    }

    fn service(db: DatabaseConnection) -> Reviews<Persistence> {
        Reviews::new(Arc::new(Persistence::new(db)))
    }

    #[tokio::test]
    async fn second_review_for_the_same_order_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[completed_order(5, 7)]])
            .append_query_results([[existing_review(5, 7)]])
            .into_connection();

        let err = service(db).create_review(7, 5, 4, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("sudah di-review")));
    }

    #[tokio::test]
    async fn review_requires_a_completed_order() {
        let mut order = completed_order(5, 7);
        order.status = "pending".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[order]])
            .into_connection();

        let err = service(db).create_review(7, 5, 4, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
