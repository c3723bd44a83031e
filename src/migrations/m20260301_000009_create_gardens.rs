//! Migration: Create garden tables (levels, per-user gardens, watering history)

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GardenLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GardenLevels::LevelId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GardenLevels::LevelNumber)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GardenLevels::LevelName).string().not_null())
                    .col(
                        ColumnDef::new(GardenLevels::RequiredWaters)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserGardens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserGardens::GardenId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserGardens::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserGardens::LevelId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserGardens::WatersCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserGardens::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserGardens::Table, UserGardens::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserGardens::Table, UserGardens::LevelId)
                            .to(GardenLevels::Table, GardenLevels::LevelId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GardenWateringLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GardenWateringLogs::WateringId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GardenWateringLogs::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GardenWateringLogs::GardenId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GardenWateringLogs::PointsSpent)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GardenWateringLogs::WateredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GardenWateringLogs::Table, GardenWateringLogs::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GardenWateringLogs::Table, GardenWateringLogs::GardenId)
                            .to(UserGardens::Table, UserGardens::GardenId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(GardenWateringLogs::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UserGardens::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GardenLevels::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "garden_levels"]
enum GardenLevels {
    Table,
    #[iden = "level_id"]
    LevelId,
    #[iden = "level_number"]
    LevelNumber,
    #[iden = "level_name"]
    LevelName,
    #[iden = "required_waters"]
    RequiredWaters,
}

#[derive(Iden)]
#[iden = "user_gardens"]
enum UserGardens {
    Table,
    #[iden = "garden_id"]
    GardenId,
    #[iden = "user_id"]
    UserId,
    #[iden = "level_id"]
    LevelId,
    #[iden = "waters_count"]
    WatersCount,
    #[iden = "updated_at"]
    UpdatedAt,
}

#[derive(Iden)]
#[iden = "garden_watering_logs"]
enum GardenWateringLogs {
    Table,
    #[iden = "watering_id"]
    WateringId,
    #[iden = "user_id"]
    UserId,
    #[iden = "garden_id"]
    GardenId,
    #[iden = "points_spent"]
    PointsSpent,
    #[iden = "watered_at"]
    WateredAt,
}
