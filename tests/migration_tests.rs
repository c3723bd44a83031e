//! Tests for `ecotrip::migrations::Migrator` and `ecotrip::db::connect_with_url`.

mod common;
use common::create_test_db;

use ecotrip::migrations::Migrator;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sea_orm_migration::MigratorTrait;

const TABLES: [&str; 14] = [
    "user_groups",
    "users",
    "challenges",
    "challenge_members",
    "carbon_factors",
    "ingest_raw",
    "mobility_logs",
    "credits_ledger",
    "garden_levels",
    "user_gardens",
    "garden_watering_logs",
    "achievements",
    "user_achievements",
    "notifications",
];

#[tokio::test]
async fn test_all_tables_exist() {
    let db = create_test_db().await;

    for table in TABLES {
        let result = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                format!(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '{}'",
                    table
                ),
            ))
            .await
            .unwrap();
        assert!(result.is_some(), "table {} should exist", table);
    }
}

#[tokio::test]
async fn test_all_migrations_applied() {
    let db = create_test_db().await;

    let pending = Migrator::get_pending_migrations(&db).await.unwrap();
    assert!(pending.is_empty());
    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), Migrator::migrations().len());
}

#[tokio::test]
async fn test_migrations_are_reversible() {
    let db = create_test_db().await;

    Migrator::down(&db, None).await.unwrap();
    let result = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'users'".to_string(),
        ))
        .await
        .unwrap();
    assert!(result.is_none());

    Migrator::up(&db, None).await.unwrap();
}

#[tokio::test]
async fn test_connect_with_url_migrates() {
    let db = ecotrip::db::connect_with_url("sqlite::memory:").await.unwrap();

    let pending = Migrator::get_pending_migrations(&db).await.unwrap();
    assert!(pending.is_empty());
}
