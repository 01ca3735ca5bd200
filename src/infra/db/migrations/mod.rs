//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}.
//!
//! All schema setup happens here at startup; no table is lazily created
//! at first use.

use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_and_addresses;
mod m20250901_000002_create_outlets_and_catalog;
mod m20250901_000003_create_orders_and_payments;
mod m20250901_000004_create_partners_reviews_audit;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_and_addresses::Migration),
            Box::new(m20250901_000002_create_outlets_and_catalog::Migration),
            Box::new(m20250901_000003_create_orders_and_payments::Migration),
            Box::new(m20250901_000004_create_partners_reviews_audit::Migration),
        ]
    }
}
