use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub role: RoleName,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            email,
            role,
            is_banned,
            created_at,
        } = value;
        Self {
            id: user_id,
            email,
            role: role.into(),
            is_banned,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_rejects_malformed_email() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "secret".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn registration_rejects_empty_password() {
        let req = RegisterRequest {
            email: "renter@example.com".into(),
            password: "".into(),
        };
        assert!(req.validate(&()).is_err());
    }
}
