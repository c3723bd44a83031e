//! Trip logging and CO2 savings.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::error::Result;
use crate::models::mobility_log::TransportMode;
use crate::models::prelude::*;
use crate::schemas::CreateMobilityLog;

/// One credit point is earned per this many grams of CO2 saved
pub const GRAMS_CO2_PER_POINT: f64 = 100.0;

/// CO2 saved by a trip of `distance_km` at an emission rate of `g_per_km`
pub fn co2_saved_grams(distance_km: f64, g_per_km: f64) -> f64 {
    distance_km * g_per_km
}

/// Points for a CO2 saving, truncated toward zero
pub fn points_for_co2(co2_saved_g: f64) -> i32 {
    (co2_saved_g / GRAMS_CO2_PER_POINT) as i32
}

pub async fn create_carbon_factor<C>(
    db: &C,
    mode: TransportMode,
    g_per_km: f64,
    valid_from: DateTime<Utc>,
    valid_to: DateTime<Utc>,
) -> Result<carbon_factor::Model>
where
    C: ConnectionTrait,
{
    let factor = carbon_factor::ActiveModel {
        mode: Set(mode),
        g_per_km: Set(g_per_km),
        valid_from: Set(valid_from),
        valid_to: Set(valid_to),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        factor_id = factor.factor_id,
        mode = ?factor.mode,
        g_per_km = factor.g_per_km,
        "Created carbon factor"
    );
    Ok(factor)
}

/// Find the factor for `mode` whose validity window covers the whole trip
pub async fn find_carbon_factor<C>(
    db: &C,
    mode: TransportMode,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
) -> Result<Option<carbon_factor::Model>>
where
    C: ConnectionTrait,
{
    Ok(CarbonFactor::find()
        .filter(carbon_factor::Column::Mode.eq(mode))
        .filter(carbon_factor::Column::ValidFrom.lte(started_at))
        .filter(carbon_factor::Column::ValidTo.gte(ended_at))
        .order_by_asc(carbon_factor::Column::FactorId)
        .one(db)
        .await?)
}

/// Record a trip with its derived CO2 saving and points.
///
/// A trip with no matching carbon factor is still recorded, with zero savings.
/// Neither the credits ledger nor challenge state is touched here.
pub async fn create_mobility_log<C>(db: &C, log: CreateMobilityLog) -> Result<mobility_log::Model>
where
    C: ConnectionTrait,
{
    let factor = find_carbon_factor(db, log.mode, log.started_at, log.ended_at).await?;

    let co2_saved_g = match &factor {
        Some(factor) => co2_saved_grams(log.distance_km, factor.g_per_km),
        None => {
            tracing::warn!(
                user_id = log.user_id,
                mode = ?log.mode,
                started_at = %log.started_at,
                "No carbon factor found for trip, CO2 saved set to 0"
            );
            0.0
        }
    };
    let points_earned = points_for_co2(co2_saved_g);

    let entry = mobility_log::ActiveModel {
        user_id: Set(log.user_id),
        mode: Set(log.mode),
        distance_km: Set(log.distance_km),
        started_at: Set(log.started_at),
        ended_at: Set(log.ended_at),
        co2_saved_g: Set(co2_saved_g),
        points_earned: Set(points_earned),
        description: Set(log.description),
        start_point: Set(log.start_point),
        end_point: Set(log.end_point),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        log_id = entry.log_id,
        user_id = entry.user_id,
        co2_saved_g,
        points_earned,
        "Recorded mobility log"
    );
    Ok(entry)
}

pub async fn get_mobility_log<C>(db: &C, log_id: i64) -> Result<Option<mobility_log::Model>>
where
    C: ConnectionTrait,
{
    Ok(MobilityLog::find_by_id(log_id).one(db).await?)
}

/// A user's trips, newest first
pub async fn get_user_mobility_logs<C>(
    db: &C,
    user_id: i64,
    skip: u64,
    limit: u64,
) -> Result<Vec<mobility_log::Model>>
where
    C: ConnectionTrait,
{
    Ok(MobilityLog::find()
        .filter(mobility_log::Column::UserId.eq(user_id))
        .order_by_desc(mobility_log::Column::StartedAt)
        .order_by_desc(mobility_log::Column::LogId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}
