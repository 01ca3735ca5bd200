//! Pickup address domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A saved pickup location for a user.
///
/// At most one address per user carries the default flag; the repository
/// clears other defaults inside the same transaction as any write that sets
/// it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub recipient_name: String,
    pub phone: String,
    pub full_address: String,
    pub note: Option<String>,
    pub is_default: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
