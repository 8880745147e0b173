use crate::model::id::{PropertyId, RentalId};
use chrono::{DateTime, Utc};

pub mod event;

/// A booking linking a renter, a seller and a property over a date range.
/// Renter and seller are referenced by email only; there is no foreign key
/// back to the users or properties tables.
#[derive(Debug)]
pub struct Rental {
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
