use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::challenge::{
    self, ChallengeCompletionType, ChallengeGoalType, ChallengeScope, ChallengeStatus,
};
use crate::models::mobility_log::TransportMode;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChallenge {
    pub title: String,
    pub description: Option<String>,
    pub scope: ChallengeScope,
    pub completion_type: ChallengeCompletionType,
    pub target_mode: TransportMode,
    pub goal_type: ChallengeGoalType,
    pub goal_target_value: f64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub reward: Option<String>,
    pub created_by: Option<i64>,
}

/// Partial update: only `Some` fields are written
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChallenge {
    pub title: Option<String>,
    pub description: Option<String>,
    pub scope: Option<ChallengeScope>,
    pub completion_type: Option<ChallengeCompletionType>,
    pub target_mode: Option<TransportMode>,
    pub goal_type: Option<ChallengeGoalType>,
    pub goal_target_value: Option<f64>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub reward: Option<String>,
    pub status: Option<ChallengeStatus>,
}

/// Progress of one user in one challenge, as computed at read time
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeProgress {
    pub challenge: challenge::Model,
    pub progress: f64,
    /// Set when this evaluation moved the challenge to COMPLETED
    pub newly_completed: bool,
}
