use crate::model::{
    id::PropertyId,
    image::{event::UploadPropertyImage, PropertyImage},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyImageRepository: Send + Sync {
    async fn upload(&self, event: UploadPropertyImage) -> AppResult<()>;
    async fn find_by_property(&self, property_id: PropertyId) -> AppResult<Vec<PropertyImage>>;
}
