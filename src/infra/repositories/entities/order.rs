//! SeaORM entity for the orders table.

use sea_orm::entity::prelude::*;

use crate::domain::OrderStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub outlet_id: Option<i64>,
    pub address_id: Option<i64>,
    pub subtotal: i64,
    pub tax_amount: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    #[sea_orm(unique)]
    pub invoice_number: Option<String>,
    pub pickup_slot: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
    #[sea_orm(has_many = "super::order_status_log::Entity")]
    StatusLogs,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::order_status_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Order {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            outlet_id: m.outlet_id,
            address_id: m.address_id,
            subtotal: m.subtotal,
            tax_amount: m.tax_amount,
            delivery_fee: m.delivery_fee,
            total: m.total,
            status: OrderStatus::parse(&m.status).unwrap_or(OrderStatus::Pending),
            payment_status: m.payment_status,
            payment_method: m.payment_method,
            invoice_number: m.invoice_number,
            pickup_slot: m.pickup_slot,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
