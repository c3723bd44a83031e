use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::mobility_log::TransportMode;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMobilityLog {
    pub user_id: i64,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub description: Option<String>,
    pub start_point: Option<String>,
    pub end_point: Option<String>,
}
