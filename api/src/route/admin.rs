use axum::{
    routing::{delete, get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::admin::{
    ban_user, delete_property_as_admin, delete_user, list_all_properties, list_all_rentals,
    list_users, stats, unban_user, update_property_as_admin,
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/users", get(list_users))
        .route("/users/:user_id/ban", put(ban_user))
        .route("/users/:user_id/unban", put(unban_user))
        .route("/users/:user_id", delete(delete_user))
        .route("/properties", get(list_all_properties))
        .route("/properties/:property_id", put(update_property_as_admin))
        .route("/properties/:property_id", delete(delete_property_as_admin))
        .route("/rentals", get(list_all_rentals))
        .route("/stats", get(stats));

    Router::new().nest("/admin", routers)
}
