//! Order domain: status model, cart pricing, and order entities.
//!
//! Status values are a closed enumeration instead of free-form strings, so
//! every endpoint validates against the same set. The timeline endpoints only
//! accept the tracking stages; `pending`/`paid`/`completed` are written by the
//! checkout, payment, and completion flows respectively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Order status, stored as a string column but validated centrally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    PickupScheduled,
    PickedUp,
    Washing,
    Drying,
    Delivering,
    Delivered,
    Completed,
}

impl OrderStatus {
    /// Stages the timeline endpoint may write, in declaration order.
    /// Forward-only progression is not enforced; any stage may be written
    /// at any time.
    pub const TRACKING_STAGES: [OrderStatus; 6] = [
        OrderStatus::PickupScheduled,
        OrderStatus::PickedUp,
        OrderStatus::Washing,
        OrderStatus::Drying,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::PickupScheduled => "pickup_scheduled",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Washing => "washing",
            OrderStatus::Drying => "drying",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "pickup_scheduled" => Some(OrderStatus::PickupScheduled),
            "picked_up" => Some(OrderStatus::PickedUp),
            "washing" => Some(OrderStatus::Washing),
            "drying" => Some(OrderStatus::Drying),
            "delivering" => Some(OrderStatus::Delivering),
            "delivered" => Some(OrderStatus::Delivered),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Parse a tracking-stage value from a timeline update request.
    ///
    /// # Errors
    /// Returns a validation error for anything outside the fixed allow-list.
    pub fn parse_tracking_stage(s: &str) -> AppResult<Self> {
        Self::parse(s)
            .filter(|status| Self::TRACKING_STAGES.contains(status))
            .ok_or_else(|| AppError::validation(format!("Status '{}' tidak valid", s)))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single cart line as submitted by the client.
///
/// Line price and quantity come from the client; all derived amounts are
/// recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    /// Catalog item id, if the line references one
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Item kind: "Layanan" (service) or "Produk" (product)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub unit: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "quantity")]
    pub qty: f64,
}

/// A sanitized, priced cart line ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: Option<i64>,
    pub name: String,
    pub kind: String,
    pub unit: String,
    pub price: i64,
    pub quantity: i64,
}

/// Drop malformed lines: missing name, negative price, or quantity <= 0.
/// Prices and quantities are coerced to integers.
pub fn sanitize_lines(lines: &[CartLine]) -> Vec<OrderLine> {
    lines
        .iter()
        .filter_map(|line| {
            let name = line.name.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }
            let price = line.price;
            let qty = line.qty;
            if price < 0.0 || qty <= 0.0 {
                return None;
            }
            Some(OrderLine {
                item_id: line.id,
                name: name.to_string(),
                kind: line.kind.clone().unwrap_or_else(|| "Layanan".to_string()),
                unit: line.unit.clone().unwrap_or_else(|| "kg".to_string()),
                price: price as i64,
                quantity: qty as i64,
            })
        })
        .collect()
}

/// Server-side pricing summary for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PriceBreakdown {
    pub subtotal: i64,
    pub tax_amount: i64,
    pub delivery_fee: i64,
    pub total: i64,
}

/// Compute subtotal, tax and total from sanitized lines.
///
/// subtotal = sum(price * quantity), tax = round(subtotal * tax_rate),
/// total = subtotal + tax + delivery_fee.
pub fn price_order(lines: &[OrderLine], tax_rate: f64, delivery_fee: i64) -> PriceBreakdown {
    let subtotal: i64 = lines.iter().map(|l| l.price * l.quantity).sum();
    let tax_amount = (subtotal as f64 * tax_rate).round() as i64;
    PriceBreakdown {
        subtotal,
        tax_amount,
        delivery_fee,
        total: subtotal + tax_amount + delivery_fee,
    }
}

/// Order domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub outlet_id: Option<i64>,
    pub address_id: Option<i64>,
    pub subtotal: i64,
    pub tax_amount: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub status: OrderStatus,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub invoice_number: Option<String>,
    pub pickup_slot: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persisted order line; immutable once the order is created.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub item_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unit: String,
    pub price: i64,
    pub quantity: i64,
}

/// Order with its lines, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Checkout result: the new order id plus the server-computed summary.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderSummary {
    pub order_id: i64,
    #[serde(flatten)]
    pub pricing: PriceBreakdown,
}

/// A single entry in the customer-facing status timeline.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusLogEntry {
    pub id: i64,
    pub order_id: i64,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: f64, qty: f64) -> CartLine {
        CartLine {
            id: None,
            name: Some(name.to_string()),
            kind: Some("Layanan".to_string()),
            unit: Some("kg".to_string()),
            price,
            qty,
        }
    }

    #[test]
    fn pricing_matches_checkout_contract() {
        // 6000 x 2 at the default 10% tax rate
        let lines = sanitize_lines(&[line("Cuci Kering", 6000.0, 2.0)]);
        let pricing = price_order(&lines, 0.1, 0);

        assert_eq!(pricing.subtotal, 12_000);
        assert_eq!(pricing.tax_amount, 1_200);
        assert_eq!(pricing.total, 13_200);
    }

    #[test]
    fn delivery_fee_is_added_after_tax() {
        let lines = sanitize_lines(&[line("Setrika", 5000.0, 3.0)]);
        let pricing = price_order(&lines, 0.1, 10_000);

        assert_eq!(pricing.subtotal, 15_000);
        assert_eq!(pricing.tax_amount, 1_500);
        assert_eq!(pricing.total, 26_500);
    }

    #[test]
    fn sanitize_drops_malformed_lines() {
        let lines = vec![
            line("Cuci Komplit", 8000.0, 1.0),
            line("", 5000.0, 1.0),
            line("Negatif", -100.0, 1.0),
            line("Kosong", 4000.0, 0.0),
            CartLine {
                id: None,
                name: None,
                kind: None,
                unit: None,
                price: 3000.0,
                qty: 1.0,
            },
        ];

        let sanitized = sanitize_lines(&lines);
        assert_eq!(sanitized.len(), 1);
        assert_eq!(sanitized[0].name, "Cuci Komplit");
    }

    #[test]
    fn sanitize_coerces_fractional_values() {
        let sanitized = sanitize_lines(&[line("Cuci Kering", 6000.9, 2.7)]);
        assert_eq!(sanitized[0].price, 6000);
        assert_eq!(sanitized[0].quantity, 2);
    }

    #[test]
    fn tracking_stage_allow_list() {
        for stage in ["pickup_scheduled", "picked_up", "washing", "drying", "delivering", "delivered"] {
            assert!(OrderStatus::parse_tracking_stage(stage).is_ok(), "{stage}");
        }

        // Lifecycle statuses exist but are not timeline stages
        assert!(OrderStatus::parse_tracking_stage("paid").is_err());
        assert!(OrderStatus::parse_tracking_stage("completed").is_err());
        assert!(OrderStatus::parse_tracking_stage("folded").is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Washing,
            OrderStatus::Completed,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("unknown"), None);
    }
}
