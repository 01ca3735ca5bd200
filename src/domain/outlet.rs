//! Outlet and catalog domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog item kind. The Indonesian labels are the stored values, so they
/// are preserved on the wire and in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemKind {
    Layanan,
    Produk,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Layanan => "Layanan",
            ItemKind::Produk => "Produk",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Layanan" => Some(ItemKind::Layanan),
            "Produk" => Some(ItemKind::Produk),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A laundry branch.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Outlet {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Delivery coverage radius in kilometres
    pub coverage_radius_km: f64,
    /// Delivery fee per kilometre, in rupiah
    pub fee_per_km: i64,
    pub minimum_fee: i64,
    pub opening_hours: Option<String>,
    pub is_active: bool,
    /// Cached aggregate, recomputed from reviews on every new review
    pub rating_avg: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A per-outlet catalog entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutletItem {
    pub id: i64,
    pub outlet_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub price: i64,
    pub unit: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where an outlet's displayed catalog came from.
///
/// Outlets without their own items fall back to the global catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Outlet,
    Global,
}

/// Outlet detail with its resolved catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutletDetail {
    #[serde(flatten)]
    pub outlet: Outlet,
    pub catalog_source: CatalogSource,
    pub items: Vec<OutletItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_preserves_indonesian_labels() {
        assert_eq!(ItemKind::Layanan.as_str(), "Layanan");
        assert_eq!(ItemKind::parse("Produk"), Some(ItemKind::Produk));
        assert_eq!(ItemKind::parse("produk"), None);
    }
}
