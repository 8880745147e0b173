use kernel::model::{
    id::PropertyId,
    property::{Property, RentalStatus},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct PropertyRow {
    pub property_id: PropertyId,
    pub description: String,
    pub property_type: String,
    pub max_person: i32,
    pub price_per_night: f64,
    pub seller_email: String,
    pub rental_status: String,
}

impl TryFrom<PropertyRow> for Property {
    type Error = AppError;

    fn try_from(value: PropertyRow) -> Result<Self, Self::Error> {
        let PropertyRow {
            property_id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        } = value;
        let rental_status = RentalStatus::from_str(&rental_status).map_err(|_| {
            AppError::ConversionEntityError(format!("Unknown rental status: {rental_status}"))
        })?;
        Ok(Property {
            property_id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        })
    }
}
