use crate::model::id::PropertyId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug)]
pub struct Property {
    pub property_id: PropertyId,
    pub description: String,
    pub property_type: String,
    pub max_person: i32,
    pub price_per_night: f64,
    pub seller_email: String,
    pub rental_status: RentalStatus,
}

/// Stored as text with the exact variant casing ("Available" / "Rented").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum RentalStatus {
    Available,
    Rented,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rental_status_text_keeps_its_casing() {
        assert_eq!(RentalStatus::Available.to_string(), "Available");
        assert_eq!(
            RentalStatus::from_str("Rented").unwrap(),
            RentalStatus::Rented
        );
        assert!(RentalStatus::from_str("rented").is_err());
    }
}
