use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a trip was made. `Any` only appears as a challenge target and matches every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    #[sea_orm(string_value = "WALK")]
    Walk,
    #[sea_orm(string_value = "BIKE")]
    Bike,
    #[sea_orm(string_value = "BUS")]
    Bus,
    #[sea_orm(string_value = "SUBWAY")]
    Subway,
    #[sea_orm(string_value = "TRAIN")]
    Train,
    #[sea_orm(string_value = "CAR")]
    Car,
    #[sea_orm(string_value = "ANY")]
    Any,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mobility_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i64,
    pub user_id: i64,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub started_at: DateTimeUtc,
    pub ended_at: DateTimeUtc,
    pub co2_saved_g: f64,
    pub points_earned: i32,
    pub description: Option<String>,
    pub start_point: Option<String>,
    pub end_point: Option<String>,
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
    #[sea_orm(has_many = "super::credits_ledger::Entity")]
    CreditsLedger,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::credits_ledger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditsLedger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
