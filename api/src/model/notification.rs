use kernel::model::{id::NotificationId, notification::Notification};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub date: String,
    pub text: String,
    pub seller_email: String,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let Notification {
            notification_id,
            date,
            text,
            seller_email,
        } = value;
        Self {
            id: notification_id,
            date,
            text,
            seller_email,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<NotificationResponse>,
}
