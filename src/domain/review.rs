//! Review domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A customer review, at most one per completed order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub order_id: i64,
    pub outlet_id: i64,
    pub user_id: i64,
    /// Rating from 1 to 5
    pub rating: i32,
    pub comment: Option<String>,
    pub reply: Option<String>,
    pub replied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Recomputed outlet rating aggregate after a review write.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct RatingAggregate {
    pub rating_avg: f64,
    pub rating_count: i64,
}
