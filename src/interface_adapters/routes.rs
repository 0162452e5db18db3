use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::interface_adapters::cors;
use crate::interface_adapters::handlers::{badge, contact, ping};
use crate::interface_adapters::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers. The trust-boundary middleware
    // wraps everything so disallowed origins never reach a handler.
    Router::new()
        .route(
            "/api/generate-badge",
            get(badge::fetch_badge).post(badge::download_badge),
        )
        .route("/api/send-badge", post(badge::send_badge))
        .route("/api/contact", post(contact::submit_contact))
        .route("/ping", get(ping::ping))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::trust_boundary,
        ))
        .with_state(state)
}
