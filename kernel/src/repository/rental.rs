use crate::model::{
    id::RentalId,
    rental::{event::CreateRental, Rental},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn create(&self, event: CreateRental) -> AppResult<RentalId>;
    async fn find_by_renter(&self, renter_email: &str) -> AppResult<Vec<Rental>>;
    async fn find_all(&self) -> AppResult<Vec<Rental>>;
}
