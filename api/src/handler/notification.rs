use axum::{
    extract::{Path, State},
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::notification::{NotificationResponse, NotificationsResponse};

pub async fn notifications_by_seller(
    State(registry): State<AppRegistry>,
    Path(seller_email): Path<String>,
) -> AppResult<Json<NotificationsResponse>> {
    let items = registry
        .notification_repository()
        .find_by_seller(&seller_email)
        .await?
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Ok(Json(NotificationsResponse { items }))
}
