use axum::{routing::get, routing::post, Router};
use registry::AppRegistry;

use crate::handler::review::{add_review, reviews_by_property, show_review_list};

pub fn build_review_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_review_list))
        .route("/add", post(add_review))
        .route("/property/:property_id", get(reviews_by_property));

    Router::new().nest("/review", routers)
}
