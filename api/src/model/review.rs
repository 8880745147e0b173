use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{PropertyId, ReviewId},
    review::{event::CreateReview, Review},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(length(min = 1))]
    pub renter_email: String,
    #[garde(range(min = 0, max = 5))]
    pub rating: i32,
    #[garde(length(min = 1))]
    pub text: String,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(value: CreateReviewRequest) -> Self {
        let CreateReviewRequest {
            property_id,
            renter_email,
            rating,
            text,
        } = value;
        CreateReview {
            property_id,
            renter_email,
            rating,
            text,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub property_id: PropertyId,
    pub renter_email: String,
    pub rating: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            property_id,
            renter_email,
            rating,
            text,
            created_at,
        } = value;
        Self {
            id: review_id,
            property_id,
            renter_email,
            rating,
            text,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_rating(rating: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            property_id: PropertyId::new(),
            renter_email: "renter@example.com".into(),
            rating,
            text: "Great stay".into(),
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(request_with_rating(0).validate(&()).is_ok());
        assert!(request_with_rating(5).validate(&()).is_ok());
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert!(request_with_rating(-1).validate(&()).is_err());
        assert!(request_with_rating(6).validate(&()).is_err());
    }
}
