use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, EnsureAdmin},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registers a user with role "user". Fails with `ConflictError` when the
    /// email is already taken.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    /// Startup seed for the admin account; a no-op when it already exists.
    async fn ensure_admin(&self, event: EnsureAdmin) -> AppResult<()>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    /// Admin accounts cannot be banned.
    async fn ban(&self, user_id: UserId) -> AppResult<()>;
    /// Intentionally has no role guard, unlike `ban` and `delete`.
    async fn unban(&self, user_id: UserId) -> AppResult<()>;
    /// Admin accounts cannot be deleted. Does not cascade to the user's
    /// rentals or reviews.
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
}
