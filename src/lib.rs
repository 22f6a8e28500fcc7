pub mod api_key;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod intent;
pub mod llm;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router. Kept out of `main` so tests can drive
/// it without binding a port.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
