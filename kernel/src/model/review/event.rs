use crate::model::id::PropertyId;
use derive_new::new;

/// No id or timestamp here: both are assigned by the store at insert time,
/// whatever the client sent.
#[derive(new)]
pub struct CreateReview {
    pub property_id: PropertyId,
    pub renter_email: String,
    pub rating: i32,
    pub text: String,
}
