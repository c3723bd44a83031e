use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditType {
    #[sea_orm(string_value = "EARN")]
    Earn,
    #[sea_orm(string_value = "SPEND")]
    Spend,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credits_ledger")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub entry_id: i64,
    pub user_id: i64,
    pub ref_log_id: Option<i64>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub entry_type: CreditType,
    pub points: i32,
    pub reason: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::mobility_log::Entity",
        from = "Column::RefLogId",
        to = "super::mobility_log::Column::LogId"
    )]
    MobilityLog,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::mobility_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MobilityLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
