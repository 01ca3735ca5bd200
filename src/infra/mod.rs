//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Unit of Work for transaction management
//! - Outbound webhook notifications

pub mod db;
pub mod notify;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use notify::Notifier;
pub use repositories::{
    AddressInput, AddressRepository, AuditLogRepository, OrderRepository, OutletInput,
    OutletItemInput, OutletRepository, PartnerApplication, PartnerRepository, PaymentRepository,
    ReviewRepository, StatusLogRepository, UserRepository,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};
