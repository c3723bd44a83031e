//! Append-only credit ledger.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::error::Result;
use crate::models::credits_ledger::CreditType;
use crate::models::prelude::*;

async fn append_entry<C>(
    db: &C,
    user_id: i64,
    credit_type: CreditType,
    points: i32,
    reason: &str,
    ref_log_id: Option<i64>,
) -> Result<credits_ledger::Model>
where
    C: ConnectionTrait,
{
    let entry = credits_ledger::ActiveModel {
        user_id: Set(user_id),
        ref_log_id: Set(ref_log_id),
        entry_type: Set(credit_type),
        points: Set(points),
        reason: Set(reason.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        entry_id = entry.entry_id,
        user_id,
        credit_type = ?credit_type,
        points,
        "Appended ledger entry"
    );
    Ok(entry)
}

/// Append an EARN entry. Points are not validated and duplicates are not checked.
pub async fn add_credits<C>(
    db: &C,
    user_id: i64,
    points: i32,
    reason: &str,
    ref_log_id: Option<i64>,
) -> Result<credits_ledger::Model>
where
    C: ConnectionTrait,
{
    append_entry(db, user_id, CreditType::Earn, points, reason, ref_log_id).await
}

/// Append a SPEND entry. The balance is not checked.
pub async fn spend_credits<C>(
    db: &C,
    user_id: i64,
    points: i32,
    reason: &str,
) -> Result<credits_ledger::Model>
where
    C: ConnectionTrait,
{
    append_entry(db, user_id, CreditType::Spend, points, reason, None).await
}

/// A user's ledger entries, newest first
pub async fn get_credit_history<C>(
    db: &C,
    user_id: i64,
    skip: u64,
    limit: u64,
) -> Result<Vec<credits_ledger::Model>>
where
    C: ConnectionTrait,
{
    Ok(CreditsLedger::find()
        .filter(credits_ledger::Column::UserId.eq(user_id))
        .order_by_desc(credits_ledger::Column::CreatedAt)
        .order_by_desc(credits_ledger::Column::EntryId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

async fn sum_points<C>(db: &C, user_id: i64, credit_type: CreditType) -> Result<i64>
where
    C: ConnectionTrait,
{
    let total: Option<Option<i64>> = CreditsLedger::find()
        .select_only()
        .column_as(credits_ledger::Column::Points.sum(), "total")
        .filter(credits_ledger::Column::UserId.eq(user_id))
        .filter(credits_ledger::Column::EntryType.eq(credit_type))
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0))
}

/// Earned minus spent points; zero for a user with no entries
pub async fn get_credit_balance<C>(db: &C, user_id: i64) -> Result<i64>
where
    C: ConnectionTrait,
{
    let earned = sum_points(db, user_id, CreditType::Earn).await?;
    let spent = sum_points(db, user_id, CreditType::Spend).await?;
    Ok(earned - spent)
}
