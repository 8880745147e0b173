use derive_new::new;

#[derive(new)]
pub struct CreateNotification {
    pub date: String,
    pub text: String,
    pub seller_email: String,
}
