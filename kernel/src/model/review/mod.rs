use crate::model::id::{PropertyId, ReviewId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Review {
    pub review_id: ReviewId,
    pub property_id: PropertyId,
    pub renter_email: String,
    pub rating: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
