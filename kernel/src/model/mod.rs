pub mod auth;
pub mod id;
pub mod image;
pub mod notification;
pub mod property;
pub mod rental;
pub mod review;
pub mod role;
pub mod user;
