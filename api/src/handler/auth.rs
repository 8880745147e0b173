use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{auth::event::CreateToken, user::event::CreateUser};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::AuthorizedUser;
use crate::model::{
    auth::{AccessTokenResponse, LoginRequest},
    user::{RegisterRequest, UserResponse},
};

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    let user = registry
        .user_repository()
        .create(CreateUser::new(req.email, req.password))
        .await?;
    Ok(Json(user.into()))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let user = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user.user_id))
        .await?;

    Ok(Json(AccessTokenResponse {
        token: access_token.0,
        email: user.email,
        role: user.role.into(),
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
