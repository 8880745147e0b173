use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
    user::User,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Checks the credentials and the ban flag. Returns the user on success,
    /// `UnauthenticatedError` on a bad email/password pair and
    /// `BannedUserError` for banned accounts regardless of the password.
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User>;
    /// Mints an access token valid for the configured TTL.
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    /// Resolves a bearer token to a user id, or None once expired/unknown.
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
    /// Invalidates a token ahead of its TTL. Deleting an unknown token is
    /// not an error.
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}
