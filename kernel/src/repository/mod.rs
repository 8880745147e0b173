pub mod auth;
pub mod health;
pub mod image;
pub mod notification;
pub mod property;
pub mod rental;
pub mod review;
pub mod user;
