use kernel::model::{
    id::{PropertyId, RentalId},
    rental::Rental,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RentalRow {
    pub rental_id: RentalId,
    pub property_id: PropertyId,
    pub renter_email: String,
    pub seller_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub number_of_people: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        let RentalRow {
            rental_id,
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
            created_at,
        } = value;
        Rental {
            rental_id,
            property_id,
            renter_email,
            seller_email,
            start_time,
            end_time,
            number_of_people,
            total_price,
            created_at,
        }
    }
}
