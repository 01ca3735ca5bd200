//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod audit_log;
pub mod catalog_item;
pub mod order;
pub mod order_item;
pub mod order_status_log;
pub mod outlet;
pub mod outlet_item;
pub mod partner_profile;
pub mod payment;
pub mod review;
pub mod user;
