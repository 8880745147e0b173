use derive_new::new;
use serde::Serialize;

pub mod admin;
pub mod auth;
pub mod image;
pub mod notification;
pub mod property;
pub mod rental;
pub mod review;
pub mod user;

#[derive(Debug, Serialize, new)]
pub struct MessageResponse {
    pub message: String,
}
