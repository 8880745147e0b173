use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::{PropertyId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::{
    admin::StatsResponse,
    property::{PropertiesResponse, PropertyResponse, UpdatePropertyRequest},
    rental::{RentalResponse, RentalsResponse},
    user::{UserResponse, UsersResponse},
    MessageResponse,
};

fn ensure_admin(user: &AuthorizedUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::UnauthorizedError)
    }
}

pub async fn list_users(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    ensure_admin(&user)?;

    let items = registry
        .user_repository()
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(UsersResponse { items }))
}

pub async fn ban_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<MessageResponse>> {
    ensure_admin(&user)?;

    registry.user_repository().ban(user_id).await?;
    Ok(Json(MessageResponse::new("User banned successfully".into())))
}

pub async fn unban_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<MessageResponse>> {
    ensure_admin(&user)?;

    registry.user_repository().unban(user_id).await?;
    Ok(Json(MessageResponse::new(
        "User unbanned successfully".into(),
    )))
}

pub async fn delete_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<MessageResponse>> {
    ensure_admin(&user)?;

    registry.user_repository().delete(user_id).await?;
    Ok(Json(MessageResponse::new(
        "User deleted successfully".into(),
    )))
}

pub async fn list_all_properties(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertiesResponse>> {
    ensure_admin(&user)?;

    let items = registry
        .property_repository()
        .find_all()
        .await?
        .into_iter()
        .map(PropertyResponse::from)
        .collect();
    Ok(Json(PropertiesResponse { items }))
}

pub async fn update_property_as_admin(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
    Json(req): Json<UpdatePropertyRequest>,
) -> AppResult<Json<MessageResponse>> {
    ensure_admin(&user)?;
    req.validate(&())?;
    if property_id != req.id {
        return Err(AppError::UnprocessableEntity(
            "Path id and body id do not match".into(),
        ));
    }

    registry.property_repository().update(req.into()).await?;
    Ok(Json(MessageResponse::new(
        "Property updated successfully".into(),
    )))
}

pub async fn delete_property_as_admin(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
) -> AppResult<Json<MessageResponse>> {
    ensure_admin(&user)?;

    registry.property_repository().delete(property_id).await?;
    Ok(Json(MessageResponse::new(
        "Property deleted successfully".into(),
    )))
}

pub async fn list_all_rentals(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RentalsResponse>> {
    ensure_admin(&user)?;

    let items = registry
        .rental_repository()
        .find_all()
        .await?
        .into_iter()
        .map(RentalResponse::from)
        .collect();
    Ok(Json(RentalsResponse { items }))
}

/// Dashboard counters, computed by loading each collection in full.
pub async fn stats(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatsResponse>> {
    ensure_admin(&user)?;

    let users = registry.user_repository().find_all().await?;
    let properties = registry.property_repository().find_all().await?;
    let rentals = registry.rental_repository().find_all().await?;

    Ok(Json(StatsResponse {
        total_users: users.len(),
        banned_users: users.iter().filter(|u| u.is_banned).count(),
        total_properties: properties.len(),
        total_rentals: rentals.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{database::ConnectionPool, redis::RedisClient};
    use chrono::Utc;
    use kernel::model::{
        auth::AccessToken,
        role::Role,
        user::{event::CreateUser, User},
    };
    use shared::config::AppConfig;
    use std::sync::Arc;

    fn registry(pool: sqlx::PgPool) -> AppRegistry {
        // The redis client connects lazily; nothing below touches it.
        let config = AppConfig::new().unwrap();
        let kv = Arc::new(RedisClient::new(&config.redis).unwrap());
        AppRegistry::new(ConnectionPool::new(pool), kv, &config)
    }

    fn caller(role: Role) -> AuthorizedUser {
        AuthorizedUser {
            access_token: AccessToken("test-token".into()),
            user: User {
                user_id: UserId::new(),
                email: "caller@x.com".into(),
                role,
                is_banned: false,
                created_at: Utc::now(),
            },
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn unban_requires_an_admin_caller(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let registry = registry(pool);
        let victim = registry
            .user_repository()
            .create(CreateUser::new("victim@x.com".into(), "pw".into()))
            .await?;
        registry.user_repository().ban(victim.user_id).await?;

        let err = unban_user(
            caller(Role::User),
            State(registry.clone()),
            Path(victim.user_id),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedError));
        let still_banned = registry
            .user_repository()
            .find_by_id(victim.user_id)
            .await?
            .unwrap();
        assert!(still_banned.is_banned);

        unban_user(
            caller(Role::Admin),
            State(registry.clone()),
            Path(victim.user_id),
        )
        .await?;
        let lifted = registry
            .user_repository()
            .find_by_id(victim.user_id)
            .await?
            .unwrap();
        assert!(!lifted.is_banned);

        Ok(())
    }
}
