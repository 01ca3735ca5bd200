//! SeaORM entity for the partner_profiles table.

use sea_orm::entity::prelude::*;

use crate::domain::PartnerStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "partner_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub outlet_id: i64,
    pub status: String,
    pub business_name: String,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub approved_at: Option<DateTimeUtc>,
    pub approved_by: Option<i64>,
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
    #[sea_orm(
        belongs_to = "super::outlet::Entity",
        from = "Column::OutletId",
        to = "super::outlet::Column::Id"
    )]
    Outlet,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::outlet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::PartnerProfile {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            outlet_id: m.outlet_id,
            status: PartnerStatus::parse(&m.status).unwrap_or(PartnerStatus::Pending),
            business_name: m.business_name,
            bank_name: m.bank_name,
            bank_account: m.bank_account,
            approved_at: m.approved_at,
            approved_by: m.approved_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
