use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::notification::notifications_by_seller;

pub fn build_notification_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/seller/:seller_email", get(notifications_by_seller));

    Router::new().nest("/notifications", routers)
}
