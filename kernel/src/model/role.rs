use strum::{AsRefStr, Display, EnumString};

/// Registration always produces `User`; `Admin` exists only through the
/// startup seed. Stored in the database as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_is_stored_as_lowercase_text() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
    }

    #[test]
    fn unknown_role_text_is_rejected() {
        assert!(Role::from_str("superuser").is_err());
    }
}
