use crate::model::id::PropertyId;
use derive_new::new;

#[derive(new)]
pub struct UploadPropertyImage {
    pub property_id: PropertyId,
    pub image_base64: String,
}
