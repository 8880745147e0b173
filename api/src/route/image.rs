use axum::{routing::get, routing::post, Router};
use registry::AppRegistry;

use crate::handler::image::{images_by_property, upload_image};

pub fn build_image_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/upload", post(upload_image))
        .route("/property/:property_id", get(images_by_property));

    Router::new().nest("/image", routers)
}
