//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence. Each repository
//! is generic over the connection, so the same type serves plain reads on the
//! pooled connection and writes inside a transaction.

mod address_repository;
pub(crate) mod entities;
mod order_repository;
mod outlet_repository;
mod partner_repository;
mod payment_repository;
mod review_repository;
mod status_repository;
mod user_repository;

pub use address_repository::{AddressInput, AddressRepository};
pub use order_repository::OrderRepository;
pub use outlet_repository::{OutletInput, OutletItemInput, OutletRepository};
pub use partner_repository::{PartnerApplication, PartnerRepository};
pub use payment_repository::PaymentRepository;
pub use review_repository::ReviewRepository;
pub use status_repository::{AuditLogRepository, StatusLogRepository};
pub use user_repository::UserRepository;
