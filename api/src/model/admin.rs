use serde::Serialize;

/// Counters for the admin dashboard, computed with full table scans.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: usize,
    pub banned_users: usize,
    pub total_properties: usize,
    pub total_rentals: usize,
}
