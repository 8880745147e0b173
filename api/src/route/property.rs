use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::property::{
    delete_property, register_property, show_properties_by_seller, show_property_list,
    update_property,
};

pub fn build_property_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_property_list))
        .route("/add", post(register_property))
        .route("/seller/:seller_email", get(show_properties_by_seller))
        .route("/:property_id", put(update_property))
        .route("/:property_id", delete(delete_property));

    Router::new().nest("/property", routers)
}
