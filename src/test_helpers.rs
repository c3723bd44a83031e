//! Test helpers for in-crate unit tests.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::migrations::Migrator;
use crate::models::challenge::{ChallengeCompletionType, ChallengeGoalType, ChallengeScope};
use crate::models::mobility_log::TransportMode;
use crate::models::{challenge, user};
use crate::schemas::{CreateChallenge, CreateUser};
use crate::services::{accounts, challenges, mobility};

/// Create an in-memory SQLite database with the full schema applied
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

pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> user::Model {
    accounts::create_user(
        db,
        CreateUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "password123".to_string(),
            role: user::UserRole::User,
            user_group_id: None,
        },
    )
    .await
    .expect("Failed to create test user")
}

/// A window from one day ago to one day ahead
pub fn current_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    (now - Duration::days(1), now + Duration::days(1))
}

pub async fn create_test_challenge(
    db: &DatabaseConnection,
    scope: ChallengeScope,
    goal_type: ChallengeGoalType,
    goal_target_value: f64,
) -> challenge::Model {
    let (start_at, end_at) = current_window();
    challenges::create_challenge(
        db,
        CreateChallenge {
            title: format!("{:?} goal", goal_type),
            description: None,
            scope,
            completion_type: ChallengeCompletionType::Auto,
            target_mode: TransportMode::Any,
            goal_type,
            goal_target_value,
            start_at,
            end_at,
            reward: None,
            created_by: None,
        },
    )
    .await
    .expect("Failed to create test challenge")
}

/// Seed a BIKE factor covering the current window
pub async fn seed_bike_factor(db: &DatabaseConnection, g_per_km: f64) {
    let now = Utc::now();
    mobility::create_carbon_factor(
        db,
        TransportMode::Bike,
        g_per_km,
        now - Duration::days(365),
        now + Duration::days(365),
    )
    .await
    .expect("Failed to seed carbon factor");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_create_test_db_is_empty() {
        let db = create_test_db().await;
        assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(challenge::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_personal_challenge_fixture_enrolls_new_users() {
        let db = create_test_db().await;
        let c = create_test_challenge(
            &db,
            ChallengeScope::Personal,
            ChallengeGoalType::TripCount,
            5.0,
        )
        .await;
        let u = create_test_user(&db, "fixture").await;

        let member = challenges::get_challenge_membership(&db, u.user_id, c.challenge_id)
            .await
            .unwrap();
        assert!(member.is_some());
    }

    #[tokio::test]
    async fn test_seeded_factor_is_found_inside_window() {
        let db = create_test_db().await;
        seed_bike_factor(&db, 120.0).await;
        let (start, end) = current_window();

        let factor = mobility::find_carbon_factor(&db, TransportMode::Bike, start, end)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(factor.g_per_km, 120.0);
    }
}
