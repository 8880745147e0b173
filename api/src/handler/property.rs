use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::PropertyId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    property::{
        CreatePropertyRequest, PropertiesResponse, PropertyResponse, UpdatePropertyRequest,
    },
    MessageResponse,
};

pub async fn show_property_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertiesResponse>> {
    let items = registry
        .property_repository()
        .find_all()
        .await?
        .into_iter()
        .map(PropertyResponse::from)
        .collect();
    Ok(Json(PropertiesResponse { items }))
}

pub async fn show_properties_by_seller(
    State(registry): State<AppRegistry>,
    Path(seller_email): Path<String>,
) -> AppResult<Json<PropertiesResponse>> {
    let items = registry
        .property_repository()
        .find_by_seller(&seller_email)
        .await?
        .into_iter()
        .map(PropertyResponse::from)
        .collect();
    Ok(Json(PropertiesResponse { items }))
}

pub async fn register_property(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePropertyRequest>,
) -> AppResult<Json<PropertyResponse>> {
    req.validate(&())?;

    let property = registry.property_repository().create(req.into()).await?;
    Ok(Json(property.into()))
}

pub async fn update_property(
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
    Json(req): Json<UpdatePropertyRequest>,
) -> AppResult<Json<MessageResponse>> {
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

pub async fn delete_property(
    State(registry): State<AppRegistry>,
    Path(property_id): Path<PropertyId>,
) -> AppResult<Json<MessageResponse>> {
    registry.property_repository().delete(property_id).await?;
    Ok(Json(MessageResponse::new(
        "Property deleted successfully".into(),
    )))
}
