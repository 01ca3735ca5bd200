//! HTTP request handlers.

pub mod address_handler;
pub mod auth_handler;
pub mod order_handler;
pub mod outlet_handler;
pub mod partner_handler;
pub mod payment_handler;
pub mod review_handler;
pub mod status_handler;

pub use address_handler::address_routes;
pub use auth_handler::{auth_routes, user_routes};
pub use order_handler::order_routes;
pub use outlet_handler::{outlet_item_routes, outlet_routes};
pub use partner_handler::{admin_routes, partner_routes};
pub use payment_handler::payment_routes;
pub use review_handler::review_routes;
pub use status_handler::status_routes;
