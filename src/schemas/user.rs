use serde::{Deserialize, Serialize};

use crate::models::user::UserRole;
use crate::models::user_group::GroupType;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserGroup {
    pub group_name: String,
    pub group_type: GroupType,
    pub region_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    /// Plain credential; hashed before it is stored
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub user_group_id: Option<i64>,
}

fn default_role() -> UserRole {
    UserRole::User
}

/// A user together with the group they act on behalf of.
/// Group fields are `None` when the user has no group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserContext {
    pub username: String,
    pub group_name: Option<String>,
    pub group_type: Option<GroupType>,
}
