use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::{BadgeBody, BadgeQuery, Envelope};
use crate::interface_adapters::state::AppState;
use crate::use_cases::generate_badge::{GenerateBadgeUseCase, InlineBadge};
use crate::use_cases::send_badge::SendBadgeUseCase;
use crate::use_cases::validate::BadgeInput;

// Fetch a badge via query parameters. Download intent is signalled with the
// literal `download=true`.
pub async fn fetch_badge(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    let download = query.download.as_deref() == Some("true");
    let input = BadgeInput {
        email: query.email,
        name: query.name,
        photo_url: query.photo_url,
    };

    inline_badge(state, input, download).await
}

// Fetch a badge via a JSON body. A body-carrying call always implies
// download intent.
pub async fn download_badge(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BadgeBody>,
) -> Response {
    let input = BadgeInput {
        email: body.email,
        name: body.name,
        photo_url: body.photo_url,
    };

    inline_badge(state, input, true).await
}

async fn inline_badge(state: Arc<AppState>, input: BadgeInput, download: bool) -> Response {
    let use_case = GenerateBadgeUseCase {
        renderer: state.renderer.clone(),
    };

    match use_case.execute(input, download).await {
        Ok(badge) => png_response(badge),
        Err(err) => error_response(err).into_response(),
    }
}

// Generate the badge and hand it to the email dispatcher.
#[tracing::instrument(name = "send_badge", skip_all)]
pub async fn send_badge(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BadgeBody>,
) -> Result<Json<Envelope>, (StatusCode, Json<Envelope>)> {
    let use_case = SendBadgeUseCase {
        renderer: state.renderer.clone(),
        dispatcher: state.mailer.clone(),
    };
    let input = BadgeInput {
        email: body.email,
        name: body.name,
        photo_url: body.photo_url,
    };

    let outcome = use_case.execute(input).await.map_err(error_response)?;

    tracing::info!("badge dispatched by email");

    Ok(Json(Envelope::ok(format!(
        "Badge sent to {}",
        outcome.recipient
    ))))
}

// Binary PNG response with the inline-delivery header set. Responses are
// never cacheable; the attachment header appears only on download intent.
fn png_response(badge: InlineBadge) -> Response {
    let mut response = (StatusCode::OK, badge.png).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    if let Some(filename) = badge.filename {
        // Derived filenames are ascii lowercase plus underscores, safe for a
        // header value; anything else is skipped rather than rejected.
        if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename={filename}")) {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }
    }

    response
}
