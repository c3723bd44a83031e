use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unprocessed payload captured from a tracking source before it becomes a mobility log
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingest_raw")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub raw_id: i64,
    pub user_id: i64,
    pub source: String,
    pub payload: String, // JSON string as received
    pub captured_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
