//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns:
//! typed status enumerations, cart pricing, and the entities the
//! REST surface returns.

pub mod address;
pub mod order;
pub mod outlet;
pub mod partner;
pub mod password;
pub mod payment;
pub mod review;
pub mod user;

pub use address::Address;
pub use order::{
    price_order, sanitize_lines, CartLine, Order, OrderDetail, OrderItem, OrderLine, OrderStatus,
    OrderSummary, PriceBreakdown, StatusLogEntry,
};
pub use outlet::{CatalogSource, ItemKind, Outlet, OutletDetail, OutletItem};
pub use partner::{PartnerProfile, PartnerStatus};
pub use password::Password;
pub use payment::{
    invoice_number, Payment, PaymentConfirmation, PaymentSession, PaymentStatus,
};
pub use review::{RatingAggregate, Review};
pub use user::{User, UserResponse, UserRole};
