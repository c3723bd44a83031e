//! Trip recording as a single unit of work.
//!
//! `create_mobility_log` deliberately has no side effects on the ledger or on
//! challenges. Callers that want the full "log, reward, evaluate challenges"
//! sequence use [`record_trip`], which performs it atomically.

use sea_orm::{ConnectionTrait, TransactionTrait};
use serde::Serialize;

use crate::error::Result;
use crate::models::{credits_ledger, mobility_log};
use crate::schemas::{ChallengeProgress, CreateMobilityLog};
use crate::services::{challenges, credits, mobility, progress};

#[derive(Debug, Clone, Serialize)]
pub struct TripOutcome {
    pub log: mobility_log::Model,
    /// `None` when the trip earned no points
    pub credit: Option<credits_ledger::Model>,
    /// Every ACTIVE challenge the user belonged to when the trip was recorded
    pub challenges: Vec<ChallengeProgress>,
}

/// Record a trip, credit its points and re-evaluate the user's active challenges,
/// all in one transaction.
pub async fn record_trip<C>(db: &C, new_log: CreateMobilityLog) -> Result<TripOutcome>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let log = mobility::create_mobility_log(&txn, new_log).await?;

    let credit = if log.points_earned > 0 {
        let reason = format!("CO2 saved on mobility log {}", log.log_id);
        let entry =
            credits::add_credits(&txn, log.user_id, log.points_earned, &reason, Some(log.log_id))
                .await?;
        Some(entry)
    } else {
        None
    };

    let mut evaluated = Vec::new();
    for challenge in challenges::get_user_active_challenges(&txn, log.user_id).await? {
        let pct = progress::calculate_challenge_progress(&txn, log.user_id, &challenge).await?;
        let status_before = challenge.status;
        let challenge =
            progress::update_challenge_status_if_completed(&txn, challenge, pct, log.user_id)
                .await?;

        evaluated.push(ChallengeProgress {
            newly_completed: challenge.status != status_before,
            challenge,
            progress: pct,
        });
    }

    txn.commit().await?;

    tracing::info!(
        log_id = log.log_id,
        user_id = log.user_id,
        challenges = evaluated.len(),
        completed = evaluated.iter().filter(|c| c.newly_completed).count(),
        "Recorded trip"
    );

    Ok(TripOutcome {
        log,
        credit,
        challenges: evaluated,
    })
}
