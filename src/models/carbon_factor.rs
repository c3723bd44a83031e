use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::mobility_log::TransportMode;

/// Emission rate for a transport mode over a validity window
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carbon_factors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub factor_id: i64,
    pub mode: TransportMode,
    /// Grams of CO2 saved per kilometre travelled
    pub g_per_km: f64,
    pub valid_from: DateTimeUtc,
    pub valid_to: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
