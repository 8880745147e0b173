use crate::model::notification::{event::CreateNotification, Notification};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, event: CreateNotification) -> AppResult<()>;
    async fn find_by_seller(&self, seller_email: &str) -> AppResult<Vec<Notification>>;
}
