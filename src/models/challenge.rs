use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::mobility_log::TransportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeScope {
    /// Every new user is enrolled automatically
    #[sea_orm(string_value = "PERSONAL")]
    Personal,
    #[sea_orm(string_value = "GROUP")]
    Group,
    #[sea_orm(string_value = "GLOBAL")]
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeCompletionType {
    #[sea_orm(string_value = "AUTO")]
    Auto,
    #[sea_orm(string_value = "MANUAL")]
    Manual,
}

/// What a challenge measures in the user's mobility logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeGoalType {
    #[sea_orm(string_value = "CO2_SAVED")]
    Co2Saved,
    #[sea_orm(string_value = "DISTANCE_KM")]
    DistanceKm,
    #[sea_orm(string_value = "TRIP_COUNT")]
    TripCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub challenge_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub scope: ChallengeScope,
    pub completion_type: ChallengeCompletionType,
    /// `TransportMode::Any` counts trips of every mode
    pub target_mode: TransportMode,
    pub goal_type: ChallengeGoalType,
    pub goal_target_value: f64,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
    pub reward: Option<String>,
    pub created_by: Option<i64>,
    pub status: ChallengeStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::challenge_member::Entity")]
    ChallengeMembers,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::UserId"
    )]
    Creator,
}

impl Related<super::challenge_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
