use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, EnsureAdmin},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use std::str::FromStr;

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let existing: Option<UserId> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE email = $1")
                .bind(&event.email)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Err(AppError::ConflictError("Email already exists".into()));
        }

        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (user_id, email, password_hash, role, is_banned)
                VALUES ($1, $2, $3, 'user', FALSE)
                RETURNING user_id, email, role, is_banned, created_at
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn ensure_admin(&self, event: EnsureAdmin) -> AppResult<()> {
        let existing: Option<UserId> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE email = $1")
                .bind(&event.email)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Ok(());
        }

        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, email, password_hash, role, is_banned)
                VALUES ($1, $2, $3, 'admin', FALSE)
            "#,
        )
        .bind(UserId::new())
        .bind(&event.email)
        .bind(password_hash)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No admin record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, role, is_banned, created_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, role, is_banned, created_at
                FROM users
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn ban(&self, user_id: UserId) -> AppResult<()> {
        self.guarded_role_check(user_id, "Cannot ban an admin")
            .await?;
        self.set_ban_flag(user_id, true).await
    }

    async fn unban(&self, user_id: UserId) -> AppResult<()> {
        // No admin guard here: only ban and delete protect admin accounts.
        let role: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if role.is_none() {
            return Err(AppError::EntityNotFound("User not found".into()));
        }
        self.set_ban_flag(user_id, false).await
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        self.guarded_role_check(user_id, "Cannot delete an admin")
            .await?;

        let res = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been deleted".into(),
            ));
        }

        Ok(())
    }
}

impl UserRepositoryImpl {
    /// Shared precondition for ban and delete: the target must exist and must
    /// not be an admin.
    async fn guarded_role_check(&self, user_id: UserId, guard_message: &str) -> AppResult<()> {
        let role: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        match role {
            None => Err(AppError::EntityNotFound("User not found".into())),
            Some(role) if Role::from_str(&role) == Ok(Role::Admin) => {
                Err(AppError::UnprocessableEntity(guard_message.into()))
            }
            Some(_) => Ok(()),
        }
    }

    async fn set_ban_flag(&self, user_id: UserId, is_banned: bool) -> AppResult<()> {
        let res = sqlx::query("UPDATE users SET is_banned = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(is_banned)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("User not found".into()));
        }
        Ok(())
    }
}
