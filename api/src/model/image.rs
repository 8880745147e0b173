use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{PropertyId, PropertyImageId},
    image::{event::UploadPropertyImage, PropertyImage},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(length(min = 1))]
    pub image_base64: String,
}

impl From<UploadImageRequest> for UploadPropertyImage {
    fn from(value: UploadImageRequest) -> Self {
        let UploadImageRequest {
            property_id,
            image_base64,
        } = value;
        UploadPropertyImage {
            property_id,
            image_base64,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageResponse {
    pub id: PropertyImageId,
    pub property_id: PropertyId,
    pub image_base64: String,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyImage> for PropertyImageResponse {
    fn from(value: PropertyImage) -> Self {
        let PropertyImage {
            image_id,
            property_id,
            image_base64,
            created_at,
        } = value;
        Self {
            id: image_id,
            property_id,
            image_base64,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImagesResponse {
    pub items: Vec<PropertyImageResponse>,
}
