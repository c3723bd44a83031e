//! Tests for `ecotrip::services::progress`: progress aggregation per goal type,
//! the auto-completion transition and the per-request progress cache.

mod common;
use common::*;

use chrono::Duration;
use ecotrip::models::challenge::{
    ChallengeCompletionType, ChallengeGoalType, ChallengeScope, ChallengeStatus,
};
use ecotrip::models::mobility_log::TransportMode;
use ecotrip::schemas::UpdateChallenge;
use ecotrip::services::{challenges, mobility, progress, ProgressTracker};

#[tokio::test]
async fn test_trip_count_progress() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "alice").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        5.0,
    )
    .await;
    for _ in 0..3 {
        log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;
    }

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 60.0);
}

#[tokio::test]
async fn test_no_trips_is_zero_progress() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "bob").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::Co2Saved,
        1000.0,
    )
    .await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 0.0);
}

#[tokio::test]
async fn test_co2_progress_sums_savings() {
    let db = create_test_db().await;
    seed_carbon_factor(&db, TransportMode::Bike, 120.0).await;
    let user = create_test_user(&db, "carol").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Bike,
        ChallengeGoalType::Co2Saved,
        2400.0,
    )
    .await;
    log_trip(&db, user.user_id, TransportMode::Bike, 10.0).await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 50.0);
}

#[tokio::test]
async fn test_distance_progress_filters_by_mode() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "dave").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Walk,
        ChallengeGoalType::DistanceKm,
        10.0,
    )
    .await;
    log_trip(&db, user.user_id, TransportMode::Walk, 2.5).await;
    log_trip(&db, user.user_id, TransportMode::Bus, 30.0).await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 25.0);
}

#[tokio::test]
async fn test_progress_ignores_trips_outside_window_and_other_users() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "erin").await;
    let other = create_test_user(&db, "frank").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        4.0,
    )
    .await;

    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;
    log_trip(&db, other.user_id, TransportMode::Walk, 1.0).await;
    let mut old = trip(user.user_id, TransportMode::Walk, 1.0);
    old.started_at -= Duration::days(5);
    old.ended_at -= Duration::days(5);
    mobility::create_mobility_log(&db, old).await.unwrap();

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 25.0);
}

#[tokio::test]
async fn test_progress_tie_rounds_to_even() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "gabe").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        16.0,
    )
    .await;
    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 6.2);
}

#[tokio::test]
async fn test_zero_target_is_zero_progress() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "gina").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        0.0,
    )
    .await;
    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 0.0);
}

// ---------------------------------------------------------------------------
// update_challenge_status_if_completed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_auto_challenge_completes_once() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "hank").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        2.0,
    )
    .await;
    challenges::join_challenge(&db, user.user_id, challenge.challenge_id)
        .await
        .unwrap();
    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;
    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;

    let pct = progress::calculate_challenge_progress(&db, user.user_id, &challenge)
        .await
        .unwrap();
    assert_eq!(pct, 100.0);

    let completed =
        progress::update_challenge_status_if_completed(&db, challenge, pct, user.user_id)
            .await
            .unwrap();
    assert_eq!(completed.status, ChallengeStatus::Completed);

    let member = challenges::get_challenge_membership(&db, user.user_id, completed.challenge_id)
        .await
        .unwrap()
        .unwrap();
    assert!(member.is_completed);

    // Calling again is a no-op
    let again = progress::update_challenge_status_if_completed(
        &db,
        completed.clone(),
        pct,
        user.user_id,
    )
    .await
    .unwrap();
    assert_eq!(again, completed);
}

#[tokio::test]
async fn test_below_target_stays_active() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "ivy").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        5.0,
    )
    .await;

    let result =
        progress::update_challenge_status_if_completed(&db, challenge.clone(), 99.9, user.user_id)
            .await
            .unwrap();
    assert_eq!(result.status, ChallengeStatus::Active);

    let stored = challenges::get_challenge(&db, challenge.challenge_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ChallengeStatus::Active);
}

#[tokio::test]
async fn test_manual_challenge_never_auto_completes() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "jack").await;
    let challenge = challenges::create_challenge(
        &db,
        challenge_input(
            ChallengeScope::Global,
            ChallengeCompletionType::Manual,
            TransportMode::Any,
            ChallengeGoalType::TripCount,
            1.0,
        ),
    )
    .await
    .unwrap();

    let result =
        progress::update_challenge_status_if_completed(&db, challenge, 150.0, user.user_id)
            .await
            .unwrap();
    assert_eq!(result.status, ChallengeStatus::Active);
}

#[tokio::test]
async fn test_expired_challenge_is_not_completed() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "jill").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        1.0,
    )
    .await;
    challenges::join_challenge(&db, user.user_id, challenge.challenge_id)
        .await
        .unwrap();
    let expired = challenges::update_challenge(
        &db,
        challenge.challenge_id,
        UpdateChallenge {
            status: Some(ChallengeStatus::Expired),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let result =
        progress::update_challenge_status_if_completed(&db, expired, 150.0, user.user_id)
            .await
            .unwrap();
    assert_eq!(result.status, ChallengeStatus::Expired);

    let stored = challenges::get_challenge(&db, challenge.challenge_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ChallengeStatus::Expired);
    let member = challenges::get_challenge_membership(&db, user.user_id, challenge.challenge_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!member.is_completed);
}

#[tokio::test]
async fn test_completion_without_membership_only_updates_challenge() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "kate").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        1.0,
    )
    .await;

    let completed =
        progress::update_challenge_status_if_completed(&db, challenge, 100.0, user.user_id)
            .await
            .unwrap();

    assert_eq!(completed.status, ChallengeStatus::Completed);
    assert!(
        challenges::get_challenge_membership(&db, user.user_id, completed.challenge_id)
            .await
            .unwrap()
            .is_none()
    );
}

// ---------------------------------------------------------------------------
// ProgressTracker
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tracker_caches_until_invalidated() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "leo").await;
    let challenge = create_test_challenge(
        &db,
        ChallengeScope::Global,
        TransportMode::Any,
        ChallengeGoalType::TripCount,
        4.0,
    )
    .await;
    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;

    let mut tracker = ProgressTracker::new();
    assert_eq!(tracker.cached(user.user_id, challenge.challenge_id), None);
    assert_eq!(
        tracker.progress(&db, user.user_id, &challenge).await.unwrap(),
        25.0
    );

    log_trip(&db, user.user_id, TransportMode::Walk, 1.0).await;
    assert_eq!(
        tracker.progress(&db, user.user_id, &challenge).await.unwrap(),
        25.0
    );

    tracker.invalidate_user(user.user_id);
    assert_eq!(tracker.cached(user.user_id, challenge.challenge_id), None);
    assert_eq!(
        tracker.progress(&db, user.user_id, &challenge).await.unwrap(),
        50.0
    );
}
