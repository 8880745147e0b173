use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::PropertyId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    review::{CreateReviewRequest, ReviewResponse, ReviewsResponse},
    MessageResponse,
};

pub async fn add_review(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry.review_repository().create(req.into()).await?;
    Ok(Json(MessageResponse::new(
        "Review added successfully".into(),
    )))
}

pub async fn reviews_by_property(
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
) -> AppResult<Json<ReviewsResponse>> {
    let items = registry
        .review_repository()
        .find_by_property(property_id)
        .await?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();
    Ok(Json(ReviewsResponse { items }))
}

pub async fn show_review_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    let items = registry
        .review_repository()
        .find_all()
        .await?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();
    Ok(Json(ReviewsResponse { items }))
}
