mod health;
mod orders;
mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::read_root))
        .route("/test", get(health::test_connectivity))
        .route("/api/products", get(products::list_products))
        .route("/api/products/featured", get(products::featured_products))
        .route("/api/orders", post(orders::create_order))
        .route("/api/seed", post(products::seed_products))
}
