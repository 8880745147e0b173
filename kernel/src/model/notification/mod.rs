use crate::model::id::NotificationId;

pub mod event;

/// Seller-facing advisory record written as a side effect of a booking.
/// `date` is a preformatted timestamp string, kept as the client displays it
/// verbatim.
#[derive(Debug)]
pub struct Notification {
    pub notification_id: NotificationId,
    pub date: String,
    pub text: String,
    pub seller_email: String,
}
