//! Challenge definitions and membership.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionTrait,
};

use crate::error::{AppError, Result};
use crate::models::challenge::ChallengeStatus;
use crate::models::prelude::*;
use crate::schemas::{CreateChallenge, UpdateChallenge};

pub async fn create_challenge<C>(db: &C, new_challenge: CreateChallenge) -> Result<challenge::Model>
where
    C: ConnectionTrait,
{
    let challenge = challenge::ActiveModel {
        title: Set(new_challenge.title),
        description: Set(new_challenge.description),
        scope: Set(new_challenge.scope),
        completion_type: Set(new_challenge.completion_type),
        target_mode: Set(new_challenge.target_mode),
        goal_type: Set(new_challenge.goal_type),
        goal_target_value: Set(new_challenge.goal_target_value),
        start_at: Set(new_challenge.start_at),
        end_at: Set(new_challenge.end_at),
        reward: Set(new_challenge.reward),
        created_by: Set(new_challenge.created_by),
        status: Set(ChallengeStatus::Active),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        challenge_id = challenge.challenge_id,
        scope = ?challenge.scope,
        "Created challenge {}",
        challenge.title
    );
    Ok(challenge)
}

pub async fn get_challenge<C>(db: &C, challenge_id: i64) -> Result<Option<challenge::Model>>
where
    C: ConnectionTrait,
{
    Ok(Challenge::find_by_id(challenge_id).one(db).await?)
}

pub async fn get_challenges<C>(db: &C, skip: u64, limit: u64) -> Result<Vec<challenge::Model>>
where
    C: ConnectionTrait,
{
    Ok(Challenge::find()
        .order_by_asc(challenge::Column::ChallengeId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

/// Apply the provided fields to a challenge, leaving the rest untouched.
/// Returns `None` when the challenge does not exist.
pub async fn update_challenge<C>(
    db: &C,
    challenge_id: i64,
    changes: UpdateChallenge,
) -> Result<Option<challenge::Model>>
where
    C: ConnectionTrait,
{
    let Some(existing) = Challenge::find_by_id(challenge_id).one(db).await? else {
        return Ok(None);
    };

    let mut challenge: challenge::ActiveModel = existing.clone().into();

    if let Some(title) = changes.title {
        challenge.title = Set(title);
    }
    if let Some(description) = changes.description {
        challenge.description = Set(Some(description));
    }
    if let Some(scope) = changes.scope {
        challenge.scope = Set(scope);
    }
    if let Some(completion_type) = changes.completion_type {
        challenge.completion_type = Set(completion_type);
    }
    if let Some(target_mode) = changes.target_mode {
        challenge.target_mode = Set(target_mode);
    }
    if let Some(goal_type) = changes.goal_type {
        challenge.goal_type = Set(goal_type);
    }
    if let Some(goal_target_value) = changes.goal_target_value {
        challenge.goal_target_value = Set(goal_target_value);
    }
    if let Some(start_at) = changes.start_at {
        challenge.start_at = Set(start_at);
    }
    if let Some(end_at) = changes.end_at {
        challenge.end_at = Set(end_at);
    }
    if let Some(reward) = changes.reward {
        challenge.reward = Set(Some(reward));
    }
    if let Some(status) = changes.status {
        challenge.status = Set(status);
    }

    if !challenge.is_changed() {
        return Ok(Some(existing));
    }

    let updated = challenge.update(db).await?;
    tracing::info!(challenge_id, "Updated challenge");
    Ok(Some(updated))
}

/// Delete a challenge and its memberships. Returns `None` when it does not exist.
pub async fn delete_challenge<C>(db: &C, challenge_id: i64) -> Result<Option<challenge::Model>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let Some(challenge) = Challenge::find_by_id(challenge_id).one(db).await? else {
        return Ok(None);
    };

    let txn = db.begin().await?;
    ChallengeMember::delete_many()
        .filter(challenge_member::Column::ChallengeId.eq(challenge_id))
        .exec(&txn)
        .await?;
    Challenge::delete_by_id(challenge_id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(challenge_id, "Deleted challenge {}", challenge.title);
    Ok(Some(challenge))
}

async fn find_membership<C>(
    db: &C,
    user_id: i64,
    challenge_id: i64,
) -> Result<Option<challenge_member::Model>>
where
    C: ConnectionTrait,
{
    Ok(ChallengeMember::find()
        .filter(challenge_member::Column::UserId.eq(user_id))
        .filter(challenge_member::Column::ChallengeId.eq(challenge_id))
        .one(db)
        .await?)
}

/// Join a challenge. Joining twice returns the existing membership.
///
/// The insert runs in its own (nested) transaction so a lost unique-index race only
/// rolls back to that savepoint, leaving a caller's transaction usable.
pub async fn join_challenge<C>(
    db: &C,
    user_id: i64,
    challenge_id: i64,
) -> Result<challenge_member::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    if let Some(existing) = find_membership(db, user_id, challenge_id).await? {
        return Ok(existing);
    }

    let member = challenge_member::ActiveModel {
        user_id: Set(user_id),
        challenge_id: Set(challenge_id),
        joined_at: Set(chrono::Utc::now()),
        is_completed: Set(false),
        ..Default::default()
    };

    let txn = db.begin().await?;
    match member.insert(&txn).await {
        Ok(member) => {
            txn.commit().await?;
            tracing::info!(user_id, challenge_id, "User joined challenge");
            Ok(member)
        }
        // A concurrent join won the unique index; hand back its row
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            txn.rollback().await?;
            find_membership(db, user_id, challenge_id)
                .await?
                .ok_or_else(|| AppError::Database(e))
        }
        Err(e) => Err(e.into()),
    }
}

/// Leave a challenge. Returns the removed membership, or `None` if there was none.
pub async fn leave_challenge<C>(
    db: &C,
    user_id: i64,
    challenge_id: i64,
) -> Result<Option<challenge_member::Model>>
where
    C: ConnectionTrait,
{
    let Some(member) = find_membership(db, user_id, challenge_id).await? else {
        return Ok(None);
    };

    ChallengeMember::delete_by_id(member.member_id)
        .exec(db)
        .await?;

    tracing::info!(user_id, challenge_id, "User left challenge");
    Ok(Some(member))
}

/// Challenges the user is a member of, by challenge id
pub async fn get_user_challenges<C>(
    db: &C,
    user_id: i64,
    skip: u64,
    limit: u64,
) -> Result<Vec<challenge::Model>>
where
    C: ConnectionTrait,
{
    Ok(Challenge::find()
        .inner_join(ChallengeMember)
        .filter(challenge_member::Column::UserId.eq(user_id))
        .order_by_asc(challenge::Column::ChallengeId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

/// Every ACTIVE challenge the user is a member of
pub async fn get_user_active_challenges<C>(db: &C, user_id: i64) -> Result<Vec<challenge::Model>>
where
    C: ConnectionTrait,
{
    Ok(Challenge::find()
        .inner_join(ChallengeMember)
        .filter(challenge_member::Column::UserId.eq(user_id))
        .filter(challenge::Column::Status.eq(ChallengeStatus::Active))
        .order_by_asc(challenge::Column::ChallengeId)
        .all(db)
        .await?)
}

/// The user's membership in a challenge, provided both the membership and the
/// challenge exist
pub async fn get_challenge_membership<C>(
    db: &C,
    user_id: i64,
    challenge_id: i64,
) -> Result<Option<challenge_member::Model>>
where
    C: ConnectionTrait,
{
    let Some(member) = find_membership(db, user_id, challenge_id).await? else {
        return Ok(None);
    };
    if Challenge::find_by_id(challenge_id).one(db).await?.is_none() {
        return Ok(None);
    }
    Ok(Some(member))
}

/// Mark a membership completed, e.g. after a MANUAL challenge is verified.
/// Returns `None` when the user is not a member.
pub async fn complete_challenge_member<C>(
    db: &C,
    user_id: i64,
    challenge_id: i64,
) -> Result<Option<challenge_member::Model>>
where
    C: ConnectionTrait,
{
    let Some(member) = find_membership(db, user_id, challenge_id).await? else {
        return Ok(None);
    };
    if member.is_completed {
        return Ok(Some(member));
    }

    let mut member: challenge_member::ActiveModel = member.into();
    member.is_completed = Set(true);
    let member = member.update(db).await?;

    tracing::info!(user_id, challenge_id, "Challenge membership completed");
    Ok(Some(member))
}
