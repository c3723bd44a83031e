//! Migration: Create mobility_logs table

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
                    .table(MobilityLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MobilityLogs::LogId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MobilityLogs::UserId).big_integer().not_null())
                    .col(ColumnDef::new(MobilityLogs::Mode).string().not_null())
                    .col(ColumnDef::new(MobilityLogs::DistanceKm).double().not_null())
                    .col(
                        ColumnDef::new(MobilityLogs::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MobilityLogs::EndedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MobilityLogs::Co2SavedG)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MobilityLogs::PointsEarned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MobilityLogs::Description).text().null())
                    .col(ColumnDef::new(MobilityLogs::StartPoint).string().null())
                    .col(ColumnDef::new(MobilityLogs::EndPoint).string().null())
                    .col(
                        ColumnDef::new(MobilityLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MobilityLogs::Table, MobilityLogs::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mobility_logs_user_started")
                    .table(MobilityLogs::Table)
                    .col(MobilityLogs::UserId)
                    .col(MobilityLogs::StartedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MobilityLogs::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "mobility_logs"]
pub enum MobilityLogs {
    Table,
    #[iden = "log_id"]
    LogId,
    #[iden = "user_id"]
    UserId,
    Mode,
    #[iden = "distance_km"]
    DistanceKm,
    #[iden = "started_at"]
    StartedAt,
    #[iden = "ended_at"]
    EndedAt,
    #[iden = "co2_saved_g"]
    Co2SavedG,
    #[iden = "points_earned"]
    PointsEarned,
    Description,
    #[iden = "start_point"]
    StartPoint,
    #[iden = "end_point"]
    EndPoint,
    #[iden = "created_at"]
    CreatedAt,
}
