use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{PropertyId, RentalId},
    rental::{event::CreateRental, Rental},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(length(min = 1))]
    pub renter_email: String,
    #[garde(length(min = 1))]
    pub seller_email: String,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    #[garde(range(min = 1))]
    pub number_of_people: i32,
    #[garde(skip)]
    pub total_price: f64,
}

impl From<CreateRentalRequest> for CreateRental {
    fn from(value: CreateRentalRequest) -> Self {
        let CreateRentalRequest {
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
        } = value;
        CreateRental {
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: RentalId,
    pub property_id: PropertyId,
    pub renter_email: String,
    pub seller_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub number_of_people: i32,
    pub total_price: f64,
}

impl From<Rental> for RentalResponse {
    fn from(value: Rental) -> Self {
        let Rental {
            rental_id,
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
            created_at: _,
        } = value;
        Self {
            id: rental_id,
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalsResponse {
    pub items: Vec<RentalResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_rejects_blank_renter_email() {
        let req = CreateRentalRequest {
            property_id: PropertyId::new(),
            renter_email: "".into(),
            seller_email: "seller@example.com".into(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            number_of_people: 2,
            total_price: 240.0,
        };
        assert!(req.validate(&()).is_err());
    }
}
