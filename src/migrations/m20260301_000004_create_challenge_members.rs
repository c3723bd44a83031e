//! Migration: Create challenge_members junction table

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_users::Users;
use super::m20260301_000003_create_challenges::Challenges;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChallengeMembers::MemberId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChallengeMembers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeMembers::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeMembers::JoinedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeMembers::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChallengeMembers::Table, ChallengeMembers::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChallengeMembers::Table, ChallengeMembers::ChallengeId)
                            .to(Challenges::Table, Challenges::ChallengeId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per (user, challenge); closes the join check-then-insert race
        manager
            .create_index(
                Index::create()
                    .name("idx_challenge_members_user_challenge")
                    .table(ChallengeMembers::Table)
                    .col(ChallengeMembers::UserId)
                    .col(ChallengeMembers::ChallengeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ChallengeMembers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "challenge_members"]
enum ChallengeMembers {
    Table,
    #[iden = "member_id"]
    MemberId,
    #[iden = "user_id"]
    UserId,
    #[iden = "challenge_id"]
    ChallengeId,
    #[iden = "joined_at"]
    JoinedAt,
    #[iden = "is_completed"]
    IsCompleted,
}
