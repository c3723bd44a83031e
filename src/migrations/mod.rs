pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_groups;
mod m20260301_000002_create_users;
mod m20260301_000003_create_challenges;
mod m20260301_000004_create_challenge_members;
mod m20260301_000005_create_carbon_factors;
mod m20260301_000006_create_ingest_raw;
mod m20260301_000007_create_mobility_logs;
mod m20260301_000008_create_credits_ledger;
mod m20260301_000009_create_gardens;
mod m20260301_000010_create_achievements;
mod m20260301_000011_create_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_groups::Migration),
            Box::new(m20260301_000002_create_users::Migration),
            Box::new(m20260301_000003_create_challenges::Migration),
            Box::new(m20260301_000004_create_challenge_members::Migration),
            Box::new(m20260301_000005_create_carbon_factors::Migration),
            Box::new(m20260301_000006_create_ingest_raw::Migration),
            Box::new(m20260301_000007_create_mobility_logs::Migration),
            Box::new(m20260301_000008_create_credits_ledger::Migration),
            Box::new(m20260301_000009_create_gardens::Migration),
            Box::new(m20260301_000010_create_achievements::Migration),
            Box::new(m20260301_000011_create_notifications::Migration),
        ]
    }
}
