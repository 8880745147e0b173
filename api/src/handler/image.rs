use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::PropertyId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    image::{PropertyImageResponse, PropertyImagesResponse, UploadImageRequest},
    MessageResponse,
};

pub async fn upload_image(
    State(registry): State<AppRegistry>,
    Json(req): Json<UploadImageRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry.image_repository().upload(req.into()).await?;
    Ok(Json(MessageResponse::new(
        "Image uploaded successfully".into(),
    )))
}

pub async fn images_by_property(
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
) -> AppResult<Json<PropertyImagesResponse>> {
    let items = registry
        .image_repository()
        .find_by_property(property_id)
        .await?
        .into_iter()
        .map(PropertyImageResponse::from)
        .collect();
    Ok(Json(PropertyImagesResponse { items }))
}
