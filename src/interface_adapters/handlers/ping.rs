use axum::Json;

use crate::interface_adapters::protocol::PingResponse;

// Liveness probe used by the frontend and deployment checks.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        msg: "Pong".to_string(),
    })
}
