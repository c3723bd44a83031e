use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garden_watering_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub watering_id: i64,
    pub user_id: i64,
    pub garden_id: i64,
    pub points_spent: i32,
    pub watered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
