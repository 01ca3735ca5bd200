//! Migration: outlets, per-outlet items, and the global catalog fallback.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outlets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Outlets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Outlets::Name).string().not_null())
                    .col(ColumnDef::new(Outlets::Address).text().not_null())
                    .col(ColumnDef::new(Outlets::Latitude).double().null())
                    .col(ColumnDef::new(Outlets::Longitude).double().null())
                    .col(
                        ColumnDef::new(Outlets::CoverageRadiusKm)
                            .double()
                            .not_null()
                            .default(5.0),
                    )
                    .col(
                        ColumnDef::new(Outlets::FeePerKm)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Outlets::MinimumFee)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Outlets::OpeningHours).string().null())
                    .col(
                        ColumnDef::new(Outlets::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Outlets::RatingAvg)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Outlets::RatingCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Outlets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Outlets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OutletItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutletItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OutletItems::OutletId).big_integer().not_null())
                    .col(ColumnDef::new(OutletItems::Name).string().not_null())
                    .col(ColumnDef::new(OutletItems::Kind).string().not_null())
                    .col(ColumnDef::new(OutletItems::Price).big_integer().not_null())
                    .col(ColumnDef::new(OutletItems::Unit).string().not_null())
                    .col(
                        ColumnDef::new(OutletItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(OutletItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OutletItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outlet_items_outlet")
                            .from(OutletItems::Table, OutletItems::OutletId)
                            .to(Outlets::Table, Outlets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_outlet_items_outlet_id")
                    .table(OutletItems::Table)
                    .col(OutletItems::OutletId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CatalogItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogItems::Name).string().not_null())
                    .col(ColumnDef::new(CatalogItems::Kind).string().not_null())
                    .col(ColumnDef::new(CatalogItems::Price).big_integer().not_null())
                    .col(ColumnDef::new(CatalogItems::Unit).string().not_null())
                    .col(
                        ColumnDef::new(CatalogItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OutletItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Outlets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Outlets {
    Table,
    Id,
    Name,
    Address,
    Latitude,
    Longitude,
    CoverageRadiusKm,
    FeePerKm,
    MinimumFee,
    OpeningHours,
    IsActive,
    RatingAvg,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum OutletItems {
    Table,
    Id,
    OutletId,
    Name,
    Kind,
    Price,
    Unit,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CatalogItems {
    Table,
    Id,
    Name,
    Kind,
    Price,
    Unit,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
