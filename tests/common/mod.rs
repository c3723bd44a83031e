//! Test helpers and utilities for integration testing.
//!
//! Every test gets its own migrated in-memory SQLite database plus a few fixture
//! builders for users, challenges and carbon factors.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use ecotrip::migrations::Migrator;
use ecotrip::models::challenge::{
    self, ChallengeCompletionType, ChallengeGoalType, ChallengeScope,
};
use ecotrip::models::mobility_log::{self, TransportMode};
use ecotrip::models::user::{self, UserRole};
use ecotrip::schemas::{CreateChallenge, CreateMobilityLog, CreateUser};
use ecotrip::services::{accounts, challenges, mobility};

pub const TEST_PASSWORD: &str = "password123";

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> DatabaseConnection {
    // Keep bcrypt cheap; must run before CONFIG is first read
    std::env::set_var("ECOTRIP_BCRYPT_COST", "4");

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Create a test user with `TEST_PASSWORD` and an `<username>@example.com` email
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> user::Model {
    accounts::create_user(
        db,
        CreateUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: TEST_PASSWORD.to_string(),
            role: UserRole::User,
            user_group_id: None,
        },
    )
    .await
    .expect("Failed to create test user")
}

/// Start and end of a window that contains "now" with a day of slack either side
pub fn current_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    (now - Duration::days(1), now + Duration::days(1))
}

pub fn challenge_input(
    scope: ChallengeScope,
    completion_type: ChallengeCompletionType,
    target_mode: TransportMode,
    goal_type: ChallengeGoalType,
    goal_target_value: f64,
) -> CreateChallenge {
    let (start_at, end_at) = current_window();
    CreateChallenge {
        title: format!("{:?} {:?} challenge", target_mode, goal_type),
        description: Some("Test challenge".to_string()),
        scope,
        completion_type,
        target_mode,
        goal_type,
        goal_target_value,
        start_at,
        end_at,
        reward: Some("Badge".to_string()),
        created_by: None,
    }
}

/// Create an AUTO challenge in the current window
pub async fn create_test_challenge(
    db: &DatabaseConnection,
    scope: ChallengeScope,
    target_mode: TransportMode,
    goal_type: ChallengeGoalType,
    goal_target_value: f64,
) -> challenge::Model {
    challenges::create_challenge(
        db,
        challenge_input(
            scope,
            ChallengeCompletionType::Auto,
            target_mode,
            goal_type,
            goal_target_value,
        ),
    )
    .await
    .expect("Failed to create test challenge")
}

/// Seed a carbon factor valid for a year around now
pub async fn seed_carbon_factor(db: &DatabaseConnection, mode: TransportMode, g_per_km: f64) {
    let now = Utc::now();
    mobility::create_carbon_factor(
        db,
        mode,
        g_per_km,
        now - Duration::days(365),
        now + Duration::days(365),
    )
    .await
    .expect("Failed to seed carbon factor");
}

/// A one-hour trip that ended an hour ago
pub fn trip(user_id: i64, mode: TransportMode, distance_km: f64) -> CreateMobilityLog {
    let ended_at = Utc::now() - Duration::hours(1);
    CreateMobilityLog {
        user_id,
        mode,
        distance_km,
        started_at: ended_at - Duration::hours(1),
        ended_at,
        description: None,
        start_point: Some("Home".to_string()),
        end_point: Some("Office".to_string()),
    }
}

pub async fn log_trip(
    db: &DatabaseConnection,
    user_id: i64,
    mode: TransportMode,
    distance_km: f64,
) -> mobility_log::Model {
    mobility::create_mobility_log(db, trip(user_id, mode, distance_km))
        .await
        .expect("Failed to log trip")
}
