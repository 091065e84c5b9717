//! Pass-through proxy for the product feed.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /api/barang`: forwards to the upstream feed and relays its status
/// and body unchanged. Nothing is cached.
pub(super) async fn proxy_barang(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let upstream = state
        .client
        .fetch_raw(&state.upstream_url)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                upstream_url = %state.upstream_url,
                request_id = %req_id.0,
                "product feed unreachable"
            );
            ApiError::new(req_id.0, "bad_gateway", "failed to fetch product feed")
        })?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    tracing::debug!(
        status = upstream.status,
        bytes = upstream.body.len(),
        "relayed product feed"
    );

    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        upstream.body,
    )
        .into_response())
}
