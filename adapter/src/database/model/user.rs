use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub role: String,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            email,
            role,
            is_banned,
            created_at,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("Unknown role: {role}")))?;
        Ok(User {
            user_id,
            email,
            role,
            is_banned,
            created_at,
        })
    }
}

/// Row used only inside the auth repository; carries the password hash,
/// which must never cross into the kernel's `User`.
#[derive(sqlx::FromRow)]
pub struct UserAuthRow {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserAuthRow> for User {
    type Error = AppError;

    fn try_from(value: UserAuthRow) -> Result<Self, Self::Error> {
        let UserAuthRow {
            user_id,
            email,
            password_hash: _,
            role,
            is_banned,
            created_at,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("Unknown role: {role}")))?;
        Ok(User {
            user_id,
            email,
            role,
            is_banned,
            created_at,
        })
    }
}
