use axum::{routing::get, routing::post, Router};
use registry::AppRegistry;

use crate::handler::rental::{rent_property, rentals_by_renter};

pub fn build_rental_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/rent", post(rent_property))
        .route("/renter/:renter_email", get(rentals_by_renter));

    Router::new().nest("/rental", routers)
}
