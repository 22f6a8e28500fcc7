use axum::{routing::any, Router};

use crate::handlers::intent_proxy;
use crate::state::AppState;

/// Every path and method lands on the proxy handler.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(intent_proxy))
        .fallback(intent_proxy)
}
