use garde::Validate;
use kernel::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property, RentalStatus,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(length(min = 1))]
    pub property_type: String,
    #[garde(range(min = 1))]
    pub max_person: i32,
    #[garde(custom(positive_price))]
    pub price_per_night: f64,
    #[garde(length(min = 1))]
    pub seller_email: String,
}

impl From<CreatePropertyRequest> for CreateProperty {
    fn from(value: CreatePropertyRequest) -> Self {
        let CreatePropertyRequest {
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
        } = value;
        CreateProperty {
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
        }
    }
}

/// The id is carried in the body as well as the path; the handler rejects
/// the request when the two disagree.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[garde(skip)]
    pub id: PropertyId,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(length(min = 1))]
    pub property_type: String,
    #[garde(range(min = 1))]
    pub max_person: i32,
    #[garde(custom(positive_price))]
    pub price_per_night: f64,
    #[garde(length(min = 1))]
    pub seller_email: String,
    #[garde(skip)]
    pub rental_status: RentalStatus,
}

impl From<UpdatePropertyRequest> for UpdateProperty {
    fn from(value: UpdatePropertyRequest) -> Self {
        let UpdatePropertyRequest {
            id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        } = value;
        UpdateProperty {
            property_id: id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        }
    }
}

fn positive_price(value: &f64, _ctx: &()) -> garde::Result {
    if *value > 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new("pricePerNight must be greater than zero"))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: PropertyId,
    pub description: String,
    pub property_type: String,
    pub max_person: i32,
    pub price_per_night: f64,
    pub seller_email: String,
    pub rental_status: RentalStatus,
}

impl From<Property> for PropertyResponse {
    fn from(value: Property) -> Self {
        let Property {
            property_id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        } = value;
        Self {
            id: property_id,
            description,
            property_type,
            max_person,
            price_per_night,
            seller_email,
            rental_status,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesResponse {
    pub items: Vec<PropertyResponse>,
}
