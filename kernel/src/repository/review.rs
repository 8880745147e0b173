use crate::model::{
    id::{PropertyId, ReviewId},
    review::{event::CreateReview, Review},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts the review only when a rental exists for the same
    /// (renter email, property id) pair; fails with `UnprocessableEntity`
    /// otherwise. Id and creation time are assigned here.
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId>;
    async fn find_by_property(&self, property_id: PropertyId) -> AppResult<Vec<Review>>;
    async fn find_all(&self) -> AppResult<Vec<Review>>;
}
