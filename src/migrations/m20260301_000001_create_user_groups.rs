//! Migration: Create user_groups table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserGroups::GroupId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserGroups::GroupName).string().not_null())
                    .col(ColumnDef::new(UserGroups::GroupType).string().not_null())
                    .col(ColumnDef::new(UserGroups::RegionCode).string().null())
                    .col(
                        ColumnDef::new(UserGroups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGroups::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "user_groups"]
pub enum UserGroups {
    Table,
    #[iden = "group_id"]
    GroupId,
    #[iden = "group_name"]
    GroupName,
    #[iden = "group_type"]
    GroupType,
    #[iden = "region_code"]
    RegionCode,
    #[iden = "created_at"]
    CreatedAt,
}
