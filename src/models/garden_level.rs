use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garden_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub level_id: i64,
    #[sea_orm(unique)]
    pub level_number: i32,
    pub level_name: String,
    pub required_waters: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
