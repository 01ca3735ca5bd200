//! SeaORM entity for the order_items table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub item_id: Option<i64>,
    pub name: String,
    pub kind: String,
    pub unit: String,
    pub price: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::OrderItem {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            item_id: m.item_id,
            name: m.name,
            kind: m.kind,
            unit: m.unit,
            price: m.price,
            quantity: m.quantity,
        }
    }
}
