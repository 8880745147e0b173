use kernel::model::{
    id::{PropertyId, PropertyImageId},
    image::PropertyImage,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct PropertyImageRow {
    pub image_id: PropertyImageId,
    pub property_id: PropertyId,
    pub image_base64: String,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyImageRow> for PropertyImage {
    fn from(value: PropertyImageRow) -> Self {
        let PropertyImageRow {
            image_id,
            property_id,
            image_base64,
            created_at,
        } = value;
        PropertyImage {
            image_id,
            property_id,
            image_base64,
            created_at,
        }
    }
}
