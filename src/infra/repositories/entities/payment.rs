//! SeaORM entity for the payments table.

use sea_orm::entity::prelude::*;

use crate::domain::PaymentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub status: String,
    pub amount: i64,
    #[sea_orm(unique)]
    pub transaction_token: String,
    pub redirect_url: String,
    pub paid_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
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

impl From<Model> for crate::domain::Payment {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            status: PaymentStatus::parse(&m.status).unwrap_or(PaymentStatus::Pending),
            amount: m.amount,
            transaction_token: m.transaction_token,
            redirect_url: m.redirect_url,
            paid_at: m.paid_at,
            created_at: m.created_at,
        }
    }
}
