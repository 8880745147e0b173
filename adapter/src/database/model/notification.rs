use kernel::model::{id::NotificationId, notification::Notification};

#[derive(sqlx::FromRow)]
pub struct NotificationRow {
    pub notification_id: NotificationId,
    pub date: String,
    pub text: String,
    pub seller_email: String,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            notification_id,
            date,
            text,
            seller_email,
        } = value;
        Notification {
            notification_id,
            date,
            text,
            seller_email,
        }
    }
}
