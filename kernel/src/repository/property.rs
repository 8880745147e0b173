use crate::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, event: CreateProperty) -> AppResult<Property>;
    async fn find_all(&self) -> AppResult<Vec<Property>>;
    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>>;
    async fn find_by_seller(&self, seller_email: &str) -> AppResult<Vec<Property>>;
    /// Full replace of the record; fails with `EntityNotFound` when no row
    /// matches at replace time.
    async fn update(&self, event: UpdateProperty) -> AppResult<()>;
    async fn delete(&self, property_id: PropertyId) -> AppResult<()>;
}
