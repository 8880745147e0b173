use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}

/// Startup seed for the admin account. Idempotent: a no-op when a user with
/// this email already exists.
#[derive(new)]
pub struct EnsureAdmin {
    pub email: String,
    pub password: String,
}
