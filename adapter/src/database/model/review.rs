use kernel::model::{
    id::{PropertyId, ReviewId},
    review::Review,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub property_id: PropertyId,
    pub renter_email: String,
    pub rating: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            property_id,
            renter_email,
            rating,
            text,
            created_at,
        } = value;
        Review {
            review_id,
            property_id,
            renter_email,
            rating,
            text,
            created_at,
        }
    }
}
