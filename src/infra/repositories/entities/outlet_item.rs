//! SeaORM entity for the outlet_items table (per-outlet catalog).

use sea_orm::entity::prelude::*;

use crate::domain::ItemKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub outlet_id: i64,
    pub name: String,
    pub kind: String,
    pub price: i64,
    pub unit: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outlet::Entity",
        from = "Column::OutletId",
        to = "super::outlet::Column::Id"
    )]
    Outlet,
}

impl Related<super::outlet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::OutletItem {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            outlet_id: m.outlet_id,
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
