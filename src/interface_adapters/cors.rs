use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::interface_adapters::protocol::Envelope;
use crate::interface_adapters::state::AppState;

const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,PATCH,OPTIONS";
const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, Authorization";
const EXPOSED_HEADERS: &str = "X-Total-Count, X-Page-Count";
// Browsers may cache the preflight verdict for 24 hours.
const PREFLIGHT_MAX_AGE: &str = "86400";

// Trust-boundary middleware. Runs before route dispatch: requests without an
// Origin header pass through untouched (non-browser callers), admitted
// origins get credentialed CORS headers, everything else is turned away
// before reaching a handler.
pub async fn trust_boundary(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let Some(origin) = origin else {
        return next.run(request).await;
    };

    if !state.origins.admits(&origin) {
        tracing::warn!(%origin, "rejected request from disallowed origin");
        return (
            StatusCode::FORBIDDEN,
            Json(Envelope::failure(format!(
                "Origin {origin} is not allowed"
            ))),
        )
            .into_response();
    }

    // The origin round-tripped through to_str, so it is a valid header value.
    let Ok(origin_value) = HeaderValue::from_str(&origin) else {
        return next.run(request).await;
    };

    if request.method() == Method::OPTIONS {
        return preflight_response(origin_value);
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(EXPOSED_HEADERS),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    response
}

fn preflight_response(origin_value: HeaderValue) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    response
}
