use crate::model::id::PropertyId;
use crate::model::property::RentalStatus;
use derive_new::new;

#[derive(new)]
pub struct CreateProperty {
    pub description: String,
    pub property_type: String,
    pub max_person: i32,
    pub price_per_night: f64,
    pub seller_email: String,
}

/// Full-document replace: every field is written, last write wins.
#[derive(new)]
pub struct UpdateProperty {
    pub property_id: PropertyId,
    pub description: String,
    pub property_type: String,
    pub max_person: i32,
    pub price_per_night: f64,
    pub seller_email: String,
    pub rental_status: RentalStatus,
}
