use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
    user::User,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use std::{str::FromStr, sync::Arc};
use uuid::Uuid;

use crate::{
    database::{model::user::UserAuthRow, ConnectionPool},
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        let row: Option<UserAuthRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, password_hash, role, is_banned, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        if !bcrypt::verify(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }
        // Banned accounts are blocked at login; already-issued tokens run out
        // on their own TTL.
        if row.is_banned {
            return Err(AppError::BannedUserError);
        }

        row.try_into()
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        self.kv
            .set_ex(
                &AuthorizationKey::from(&access_token),
                &AuthorizedUserId::new(event.user_id),
                self.ttl,
            )
            .await?;
        Ok(access_token)
    }

    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key = AuthorizationKey::from(access_token);
        Ok(self.kv.get(&key).await?.map(AuthorizedUserId::into_inner))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key = AuthorizationKey::from(&access_token);
        self.kv.delete(&key).await
    }
}

struct AuthorizationKey(String);

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.clone())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

#[derive(new)]
pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(UserId::from_str(&value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::role::Role;
    use kernel::model::user::event::{CreateUser, EnsureAdmin};
    use kernel::repository::user::UserRepository;
    use shared::config::RedisConfig;

    fn repo(pool: sqlx::PgPool) -> AuthRepositoryImpl {
        // The redis client connects lazily; credential checks below never
        // touch it.
        let kv = Arc::new(
            RedisClient::new(&RedisConfig {
                host: "localhost".into(),
                port: 6379,
            })
            .unwrap(),
        );
        AuthRepositoryImpl::new(ConnectionPool::new(pool), kv, 3600)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_accepts_correct_credentials(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        users
            .create(CreateUser::new("a@x.com".into(), "pw".into()))
            .await?;

        let auth = repo(pool);
        let user = auth.verify_user("a@x.com", "pw").await?;
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, Role::User);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_rejects_bad_credentials(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        users
            .create(CreateUser::new("a@x.com".into(), "pw".into()))
            .await?;

        let auth = repo(pool);
        assert!(matches!(
            auth.verify_user("a@x.com", "wrong").await.unwrap_err(),
            AppError::UnauthenticatedError
        ));
        assert!(matches!(
            auth.verify_user("nobody@x.com", "pw").await.unwrap_err(),
            AppError::UnauthenticatedError
        ));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn banned_account_cannot_log_in(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user = users
            .create(CreateUser::new("banned@x.com".into(), "pw".into()))
            .await?;
        users.ban(user.user_id).await?;

        let auth = repo(pool);
        assert!(matches!(
            auth.verify_user("banned@x.com", "pw").await.unwrap_err(),
            AppError::BannedUserError
        ));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn seeded_admin_can_log_in(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        users
            .ensure_admin(EnsureAdmin::new("admin@renting.com".into(), "admin".into()))
            .await?;

        let auth = repo(pool);
        let admin = auth.verify_user("admin@renting.com", "admin").await?;
        assert_eq!(admin.role, Role::Admin);

        Ok(())
    }
}
