use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash, never the plain credential
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub user_group_id: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_group::Entity",
        from = "Column::UserGroupId",
        to = "super::user_group::Column::GroupId"
    )]
    UserGroup,
    #[sea_orm(has_many = "super::mobility_log::Entity")]
    MobilityLogs,
    #[sea_orm(has_many = "super::credits_ledger::Entity")]
    CreditsLedger,
    #[sea_orm(has_many = "super::challenge_member::Entity")]
    ChallengeMembers,
}

impl Related<super::user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroup.def()
    }
}

impl Related<super::mobility_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MobilityLogs.def()
    }
}

impl Related<super::credits_ledger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditsLedger.def()
    }
}

impl Related<super::challenge::Entity> for Entity {
    fn to() -> RelationDef {
        super::challenge_member::Relation::Challenge.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::challenge_member::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
