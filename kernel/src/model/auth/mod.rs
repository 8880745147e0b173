pub mod event;

/// Opaque bearer credential handed out at login. The token itself carries no
/// claims; it resolves to a user id through the key value store for as long
/// as its TTL lasts.
pub struct AccessToken(pub String);
