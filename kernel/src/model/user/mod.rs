use crate::model::{id::UserId, role::Role};
use chrono::{DateTime, Utc};

pub mod event;

/// Safe projection of a user record. The password hash never leaves the
/// adapter layer.
#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}
