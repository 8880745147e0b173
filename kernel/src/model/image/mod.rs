use crate::model::id::{PropertyId, PropertyImageId};
use chrono::{DateTime, Utc};

pub mod event;

/// Inline-encoded image blob. Many per property; listed in insertion order.
#[derive(Debug)]
pub struct PropertyImage {
    pub image_id: PropertyImageId,
    pub property_id: PropertyId,
    pub image_base64: String,
    pub created_at: DateTime<Utc>,
}
