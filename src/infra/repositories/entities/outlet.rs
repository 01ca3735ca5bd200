//! SeaORM entity for the outlets table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "outlets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub coverage_radius_km: f64,
    pub fee_per_km: i64,
    pub minimum_fee: i64,
    pub opening_hours: Option<String>,
    pub is_active: bool,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::outlet_item::Entity")]
    OutletItems,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::outlet_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletItems.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Outlet {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            address: m.address,
            latitude: m.latitude,
            longitude: m.longitude,
            coverage_radius_km: m.coverage_radius_km,
            fee_per_km: m.fee_per_km,
            minimum_fee: m.minimum_fee,
            opening_hours: m.opening_hours,
            is_active: m.is_active,
            rating_avg: m.rating_avg,
            rating_count: m.rating_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
