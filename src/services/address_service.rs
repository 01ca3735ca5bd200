//! Pickup address service.
//!
//! Setting a default clears any previous default inside the same
//! transaction, so a user never has two.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Address;
use crate::errors::{AppResult, OptionExt};
use crate::infra::{AddressInput, AddressRepository, UnitOfWork};

/// Address book operations exposed to the API layer.
#[mockall::automock]
#[async_trait]
pub trait AddressService: Send + Sync {
    async fn list(&self, user_id: i64) -> AppResult<Vec<Address>>;
    async fn create(&self, user_id: i64, input: AddressInput) -> AppResult<Address>;
    async fn update(&self, user_id: i64, address_id: i64, input: AddressInput)
        -> AppResult<Address>;
    async fn delete(&self, user_id: i64, address_id: i64) -> AppResult<()>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressBook<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressBook<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressBook<U> {
    async fn list(&self, user_id: i64) -> AppResult<Vec<Address>> {
        AddressRepository::new(self.uow.conn())
            .list_for_user(user_id)
            .await
    }

    async fn create(&self, user_id: i64, input: AddressInput) -> AppResult<Address> {
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    if input.is_default {
                        ctx.addresses().clear_defaults(user_id).await?;
                    }
                    ctx.addresses().create(user_id, input).await
                })
            })
            .await
    }

    async fn update(
        &self,
        user_id: i64,
        address_id: i64,
        input: AddressInput,
    ) -> AppResult<Address> {
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    ctx.addresses()
                        .find_owned_for_update(address_id, user_id)
                        .await?
                        .ok_or_not_found("Alamat tidak ditemukan")?;

                    if input.is_default {
                        ctx.addresses().clear_defaults(user_id).await?;
                    }
                    ctx.addresses().update(address_id, user_id, input).await
                })
            })
            .await
    }

    async fn delete(&self, user_id: i64, address_id: i64) -> AppResult<()> {
        AddressRepository::new(self.uow.conn())
            .delete(address_id, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::infra::repositories::entities::address;
    use crate::infra::Persistence;

    fn input(is_default: bool) -> AddressInput {
        AddressInput {
            label: "Rumah".to_string(),
            recipient_name: "Budi Santoso".to_string(),
            phone: "081234567890".to_string(),
            full_address: "Jl. Melati No. 1, Jakarta".to_string(),
            note: None,
            is_default,
            latitude: None,
            longitude: None,
        }
    }

    fn stored(id: i64, user_id: i64, is_default: bool) -> address::Model {
        let now = Utc::now();
        address::Model {
            id,
            user_id,
            label: "Rumah".to_string(),
            recipient_name: "Budi Santoso".to_string(),
            phone: "081234567890".to_string(),
            full_address: "Jl. Melati No. 1, Jakarta".to_string(),
            note: None,
            is_default,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn creating_a_default_clears_previous_defaults_first() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([[stored(2, 7, true)]])
            .into_connection();
        let uow = Arc::new(Persistence::new(db));

        let created = AddressBook::new(Arc::clone(&uow))
            .create(7, input(true))
            .await
            .unwrap();
        assert!(created.is_default);

        let log = format!(
            "{:?}",
            Arc::try_unwrap(uow)
                .ok()
                .unwrap()
                .into_connection()
                .into_transaction_log()
        );
        let cleared = log.find("UPDATE").expect("previous defaults cleared");
        let inserted = log.find("INSERT").expect("new address inserted");
        assert!(cleared < inserted);
    }

    #[tokio::test]
    async fn creating_a_non_default_leaves_other_rows_alone() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored(2, 7, false)]])
            .into_connection();
        let uow = Arc::new(Persistence::new(db));

        let created = AddressBook::new(Arc::clone(&uow))
            .create(7, input(false))
            .await
            .unwrap();
        assert!(!created.is_default);

        let log = format!(
            "{:?}",
            Arc::try_unwrap(uow)
                .ok()
                .unwrap()
                .into_connection()
                .into_transaction_log()
        );
        assert!(!log.contains("UPDATE"));
    }
}
