//! Migration: Create ingest_raw table for unprocessed tracker payloads

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
                    .table(IngestRaw::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IngestRaw::RawId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IngestRaw::UserId).big_integer().not_null())
                    .col(ColumnDef::new(IngestRaw::Source).string().not_null())
                    .col(ColumnDef::new(IngestRaw::Payload).text().not_null())
                    .col(
                        ColumnDef::new(IngestRaw::CapturedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(IngestRaw::Table, IngestRaw::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IngestRaw::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "ingest_raw"]
enum IngestRaw {
    Table,
    #[iden = "raw_id"]
    RawId,
    #[iden = "user_id"]
    UserId,
    Source,
    Payload,
    #[iden = "captured_at"]
    CapturedAt,
}
