//! Migration: Create challenges table

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
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Challenges::ChallengeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Challenges::Title).string().not_null())
                    .col(ColumnDef::new(Challenges::Description).text().null())
                    .col(ColumnDef::new(Challenges::Scope).string().not_null())
                    .col(
                        ColumnDef::new(Challenges::CompletionType)
                            .string()
                            .not_null()
                            .default("AUTO"),
                    )
                    .col(
                        ColumnDef::new(Challenges::TargetMode)
                            .string()
                            .not_null()
                            .default("ANY"),
                    )
                    .col(ColumnDef::new(Challenges::GoalType).string().not_null())
                    .col(
                        ColumnDef::new(Challenges::GoalTargetValue)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Challenges::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Challenges::EndAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Challenges::Reward).string().null())
                    .col(ColumnDef::new(Challenges::CreatedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Challenges::Status)
                            .string()
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Challenges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Challenges::Table, Challenges::CreatedBy)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_challenges_scope")
                    .table(Challenges::Table)
                    .col(Challenges::Scope)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenges::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Challenges {
    Table,
    #[iden = "challenge_id"]
    ChallengeId,
    Title,
    Description,
    Scope,
    #[iden = "completion_type"]
    CompletionType,
    #[iden = "target_mode"]
    TargetMode,
    #[iden = "goal_type"]
    GoalType,
    #[iden = "goal_target_value"]
    GoalTargetValue,
    #[iden = "start_at"]
    StartAt,
    #[iden = "end_at"]
    EndAt,
    Reward,
    #[iden = "created_by"]
    CreatedBy,
    Status,
    #[iden = "created_at"]
    CreatedAt,
}
