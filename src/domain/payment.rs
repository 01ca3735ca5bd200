//! Payment domain: mock gateway sessions and the invoice number format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{INVOICE_ID_WIDTH, INVOICE_PREFIX};

/// Payment status; a mock payment only ever moves from pending to paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment domain entity; one attempt per transaction token.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub status: PaymentStatus,
    pub amount: i64,
    pub transaction_token: String,
    pub redirect_url: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Response for a freshly created mock payment session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentSession {
    pub order_id: i64,
    pub transaction_token: String,
    pub redirect_url: String,
    pub amount: i64,
}

/// Outcome of a confirmation call; `already_paid` marks the idempotent
/// short-circuit where no state was mutated.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentConfirmation {
    pub order_id: i64,
    pub invoice_number: String,
    pub already_paid: bool,
}

/// Build the invoice number for an order: `INV-` + id zero-padded to 6 digits.
pub fn invoice_number(order_id: i64) -> String {
    format!("{INVOICE_PREFIX}{order_id:0width$}", width = INVOICE_ID_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_is_zero_padded() {
        assert_eq!(invoice_number(5), "INV-000005");
        assert_eq!(invoice_number(123456), "INV-123456");
        // Wider ids are not truncated
        assert_eq!(invoice_number(12345678), "INV-12345678");
    }

    #[test]
    fn payment_status_parses() {
        assert_eq!(PaymentStatus::parse("paid"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::parse("pending"), Some(PaymentStatus::Pending));
        assert_eq!(PaymentStatus::parse("refunded"), None);
    }
}
