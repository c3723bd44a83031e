//! Migration: Create credits_ledger table

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_users::Users;
use super::m20260301_000007_create_mobility_logs::MobilityLogs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CreditsLedger::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditsLedger::EntryId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditsLedger::UserId).big_integer().not_null())
                    .col(ColumnDef::new(CreditsLedger::RefLogId).big_integer().null())
                    .col(ColumnDef::new(CreditsLedger::Type).string().not_null())
                    .col(ColumnDef::new(CreditsLedger::Points).integer().not_null())
                    .col(ColumnDef::new(CreditsLedger::Reason).string().not_null())
                    .col(
                        ColumnDef::new(CreditsLedger::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CreditsLedger::Table, CreditsLedger::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CreditsLedger::Table, CreditsLedger::RefLogId)
                            .to(MobilityLogs::Table, MobilityLogs::LogId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_credits_ledger_user")
                    .table(CreditsLedger::Table)
                    .col(CreditsLedger::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CreditsLedger::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "credits_ledger"]
enum CreditsLedger {
    Table,
    #[iden = "entry_id"]
    EntryId,
    #[iden = "user_id"]
    UserId,
    #[iden = "ref_log_id"]
    RefLogId,
    Type,
    Points,
    Reason,
    #[iden = "created_at"]
    CreatedAt,
}
