//! Users, user groups and credential checks.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::error::Result;
use crate::models::challenge::ChallengeScope;
use crate::models::prelude::*;
use crate::schemas::{CreateUser, CreateUserGroup, UserContext};
use crate::services::security::{hash_password, verify_password};

pub async fn create_user_group<C>(db: &C, group: CreateUserGroup) -> Result<user_group::Model>
where
    C: ConnectionTrait,
{
    let new_group = user_group::ActiveModel {
        group_name: Set(group.group_name),
        group_type: Set(group.group_type),
        region_code: Set(group.region_code),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let group = new_group.insert(db).await?;
    tracing::info!(group_id = group.group_id, "Created user group {}", group.group_name);
    Ok(group)
}

pub async fn get_user_groups<C>(db: &C, skip: u64, limit: u64) -> Result<Vec<user_group::Model>>
where
    C: ConnectionTrait,
{
    Ok(UserGroup::find()
        .order_by_asc(user_group::Column::GroupId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

/// Create a user and enroll them in every PERSONAL challenge.
///
/// The user row and its default memberships are written in one transaction, so a
/// failure part-way leaves neither behind.
pub async fn create_user<C>(db: &C, new_user: CreateUser) -> Result<user::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    let password_hash = hash_password(&new_user.password)?;
    let now = chrono::Utc::now();

    let txn = db.begin().await?;

    let user = user::ActiveModel {
        username: Set(new_user.username),
        email: Set(new_user.email),
        password_hash: Set(password_hash),
        role: Set(new_user.role),
        user_group_id: Set(new_user.user_group_id),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let default_challenges = Challenge::find()
        .filter(challenge::Column::Scope.eq(ChallengeScope::Personal))
        .all(&txn)
        .await?;

    for challenge in &default_challenges {
        challenge_member::ActiveModel {
            user_id: Set(user.user_id),
            challenge_id: Set(challenge.challenge_id),
            joined_at: Set(now),
            is_completed: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(
        user_id = user.user_id,
        personal_challenges = default_challenges.len(),
        "Created user {}",
        user.username
    );
    Ok(user)
}

pub async fn get_users<C>(db: &C, skip: u64, limit: u64) -> Result<Vec<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(User::find()
        .order_by_asc(user::Column::UserId)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?)
}

pub async fn get_user_by_id<C>(db: &C, user_id: i64) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(User::find_by_id(user_id).one(db).await?)
}

/// Look up a user by username only (email is not considered here)
pub async fn get_user_by_username<C>(db: &C, username: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?)
}

/// Delete a user and every row that references them.
///
/// Returns the removed user, or `None` (with nothing written) when the id is unknown.
pub async fn delete_user<C>(db: &C, user_id: i64) -> Result<Option<user::Model>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let Some(user) = User::find_by_id(user_id).one(db).await? else {
        return Ok(None);
    };

    let txn = db.begin().await?;
    let mut removed = 0;

    removed += MobilityLog::delete_many()
        .filter(mobility_log::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += CreditsLedger::delete_many()
        .filter(credits_ledger::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += ChallengeMember::delete_many()
        .filter(challenge_member::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    // Watering history references the garden, so it goes first
    removed += GardenWateringLog::delete_many()
        .filter(garden_watering_log::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += UserGarden::delete_many()
        .filter(user_garden::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += Challenge::delete_many()
        .filter(challenge::Column::CreatedBy.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += UserAchievement::delete_many()
        .filter(user_achievement::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += Notification::delete_many()
        .filter(notification::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;
    removed += IngestRaw::delete_many()
        .filter(ingest_raw::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?
        .rows_affected;

    User::delete_by_id(user_id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        user_id,
        dependent_rows = removed,
        "Deleted user {}",
        user.username
    );
    Ok(Some(user))
}

/// Resolve a user's group context; a user without a group still resolves
pub async fn get_user_with_group<C>(db: &C, user_id: i64) -> Result<Option<UserContext>>
where
    C: ConnectionTrait,
{
    let result = User::find_by_id(user_id)
        .find_also_related(UserGroup)
        .one(db)
        .await?;

    Ok(result.map(|(user, group)| UserContext {
        username: user.username,
        group_name: group.as_ref().map(|g| g.group_name.clone()),
        group_type: group.map(|g| g.group_type),
    }))
}

/// Authenticate by username or email plus password.
///
/// Returns `None` for an unknown identifier and for a wrong password alike.
pub async fn authenticate_user<C>(
    db: &C,
    identifier: &str,
    password: &str,
) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    let user = User::find()
        .filter(
            Condition::any()
                .add(user::Column::Username.eq(identifier))
                .add(user::Column::Email.eq(identifier)),
        )
        .one(db)
        .await?;

    match user {
        Some(user) if verify_password(password, &user.password_hash) => Ok(Some(user)),
        Some(user) => {
            tracing::debug!(user_id = user.user_id, "Password mismatch");
            Ok(None)
        }
        None => Ok(None),
    }
}
