//! Challenge progress and automatic completion.
//!
//! Progress is never stored. It is recomputed from the user's mobility logs that
//! fall inside the challenge window (and match its target mode, unless that is
//! `ANY`), aggregated according to the goal type:
//!
//! - `CO2_SAVED`: sum of `co2_saved_g`
//! - `DISTANCE_KM`: sum of `distance_km`
//! - `TRIP_COUNT`: number of matching logs

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};

use crate::error::Result;
use crate::models::challenge::{ChallengeCompletionType, ChallengeGoalType, ChallengeStatus};
use crate::models::mobility_log::TransportMode;
use crate::models::prelude::*;

/// Percentage of `target` reached by `achieved`, rounded to one decimal place with
/// ties going to the even digit. A non-positive target yields 0.
pub fn progress_percentage(achieved: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let progress = achieved / target * 100.0;
    // Formatting rounds the exact binary value half-to-even
    format!("{:.1}", progress).parse().unwrap_or(progress)
}

fn matching_logs(user_id: i64, challenge: &challenge::Model) -> Condition {
    let condition = Condition::all()
        .add(mobility_log::Column::UserId.eq(user_id))
        .add(mobility_log::Column::StartedAt.gte(challenge.start_at))
        .add(mobility_log::Column::EndedAt.lte(challenge.end_at));

    if challenge.target_mode == TransportMode::Any {
        condition
    } else {
        condition.add(mobility_log::Column::Mode.eq(challenge.target_mode))
    }
}

async fn sum_logs<C>(db: &C, condition: Condition, column: mobility_log::Column) -> Result<f64>
where
    C: ConnectionTrait,
{
    let total: Option<Option<f64>> = MobilityLog::find()
        .select_only()
        .column_as(column.sum(), "total")
        .filter(condition)
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0.0))
}

/// Compute a user's progress in a challenge as a percentage. Read-only.
pub async fn calculate_challenge_progress<C>(
    db: &C,
    user_id: i64,
    challenge: &challenge::Model,
) -> Result<f64>
where
    C: ConnectionTrait,
{
    let condition = matching_logs(user_id, challenge);

    let achieved = match challenge.goal_type {
        ChallengeGoalType::Co2Saved => {
            sum_logs(db, condition, mobility_log::Column::Co2SavedG).await?
        }
        ChallengeGoalType::DistanceKm => {
            sum_logs(db, condition, mobility_log::Column::DistanceKm).await?
        }
        ChallengeGoalType::TripCount => {
            MobilityLog::find().filter(condition).count(db).await? as f64
        }
    };

    let progress = progress_percentage(achieved, challenge.goal_target_value);
    tracing::debug!(
        user_id,
        challenge_id = challenge.challenge_id,
        achieved,
        progress,
        "Calculated challenge progress"
    );
    Ok(progress)
}

/// Move an AUTO challenge from ACTIVE to COMPLETED once progress reaches 100%,
/// marking the user's membership completed in the same transaction.
///
/// Any failed guard returns the challenge unchanged, so repeated calls are no-ops.
pub async fn update_challenge_status_if_completed<C>(
    db: &C,
    challenge: challenge::Model,
    progress: f64,
    user_id: i64,
) -> Result<challenge::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    if challenge.completion_type != ChallengeCompletionType::Auto
        || progress < 100.0
        || challenge.status != ChallengeStatus::Active
    {
        return Ok(challenge);
    }

    let challenge_id = challenge.challenge_id;
    let txn = db.begin().await?;

    let mut completed: challenge::ActiveModel = challenge.into();
    completed.status = Set(ChallengeStatus::Completed);
    let completed = completed.update(&txn).await?;

    let member = ChallengeMember::find()
        .filter(challenge_member::Column::UserId.eq(user_id))
        .filter(challenge_member::Column::ChallengeId.eq(challenge_id))
        .one(&txn)
        .await?;
    if let Some(member) = member {
        let mut member: challenge_member::ActiveModel = member.into();
        member.is_completed = Set(true);
        member.update(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(user_id, challenge_id, progress, "Challenge completed");
    Ok(completed)
}

/// Per-request memo of challenge progress, keyed by `(user_id, challenge_id)`.
///
/// Create one per unit of work; it never sees logs written after a value was cached
/// unless [`ProgressTracker::invalidate_user`] is called.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    cache: HashMap<(i64, i64), f64>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn progress<C>(
        &mut self,
        db: &C,
        user_id: i64,
        challenge: &challenge::Model,
    ) -> Result<f64>
    where
        C: ConnectionTrait,
    {
        let key = (user_id, challenge.challenge_id);
        if let Some(progress) = self.cache.get(&key) {
            return Ok(*progress);
        }

        let progress = calculate_challenge_progress(db, user_id, challenge).await?;
        self.cache.insert(key, progress);
        Ok(progress)
    }

    pub fn cached(&self, user_id: i64, challenge_id: i64) -> Option<f64> {
        self.cache.get(&(user_id, challenge_id)).copied()
    }

    /// Drop every cached value for a user, e.g. after logging a new trip
    pub fn invalidate_user(&mut self, user_id: i64) {
        self.cache.retain(|(cached_user, _), _| *cached_user != user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage_zero_target() {
        assert_eq!(progress_percentage(50.0, 0.0), 0.0);
        assert_eq!(progress_percentage(50.0, -10.0), 0.0);
    }

    #[test]
    fn test_progress_percentage_exact_target_is_100() {
        assert_eq!(progress_percentage(5.0, 5.0), 100.0);
        assert_eq!(progress_percentage(1200.0, 1200.0), 100.0);
    }

    #[test]
    fn test_progress_percentage_rounds_to_one_decimal() {
        assert_eq!(progress_percentage(3.0, 5.0), 60.0);
        assert_eq!(progress_percentage(1.0, 3.0), 33.3);
        assert_eq!(progress_percentage(2.0, 3.0), 66.7);
    }

    #[test]
    fn test_progress_percentage_ties_round_to_even() {
        // 6.25, 18.75 and 31.25 are exact in binary
        assert_eq!(progress_percentage(1.0, 16.0), 6.2);
        assert_eq!(progress_percentage(3.0, 16.0), 18.8);
        assert_eq!(progress_percentage(5.0, 16.0), 31.2);
    }

    #[test]
    fn test_progress_percentage_can_exceed_100() {
        assert_eq!(progress_percentage(15.0, 10.0), 150.0);
    }

    #[test]
    fn test_progress_percentage_nothing_achieved() {
        assert_eq!(progress_percentage(0.0, 10.0), 0.0);
    }
}
