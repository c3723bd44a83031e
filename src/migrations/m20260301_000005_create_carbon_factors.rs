//! Migration: Create carbon_factors reference table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarbonFactors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarbonFactors::FactorId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CarbonFactors::Mode).string().not_null())
                    .col(ColumnDef::new(CarbonFactors::GPerKm).double().not_null())
                    .col(
                        ColumnDef::new(CarbonFactors::ValidFrom)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CarbonFactors::ValidTo)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_carbon_factors_mode_validity")
                    .table(CarbonFactors::Table)
                    .col(CarbonFactors::Mode)
                    .col(CarbonFactors::ValidFrom)
                    .col(CarbonFactors::ValidTo)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarbonFactors::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "carbon_factors"]
enum CarbonFactors {
    Table,
    #[iden = "factor_id"]
    FactorId,
    Mode,
    #[iden = "g_per_km"]
    GPerKm,
    #[iden = "valid_from"]
    ValidFrom,
    #[iden = "valid_to"]
    ValidTo,
}
