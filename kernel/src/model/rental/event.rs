use crate::model::id::PropertyId;
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateRental {
    pub property_id: PropertyId,
    pub renter_email: String,
    pub seller_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub number_of_people: i32,
    pub total_price: f64,
}
