//! SeaORM entity for the global catalog table.
//!
//! Serves as the fallback when an outlet has no items of its own.

use sea_orm::entity::prelude::*;

use crate::domain::ItemKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub price: i64,
    pub unit: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::OutletItem {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            // Global items are not bound to an outlet
            outlet_id: 0,
            name: m.name,
            kind: ItemKind::parse(&m.kind).unwrap_or(ItemKind::Layanan),
            price: m.price,
            unit: m.unit,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
