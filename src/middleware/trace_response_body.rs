use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, InternalServerError},
    state::ApiState,
};

/// Middlware to trace the response body.
///
/// Buffers the entire response body, so it is only layered when `trace_response_body` is enabled.
pub async fn trace_response_body(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let res = next.run(req).await;

    let (parts, body) = res.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?
        .to_bytes();

    match std::str::from_utf8(&bytes) {
        Ok(body) => tracing::trace!(status = %parts.status, %body, "Response body"),
        Err(_) => tracing::trace!(status = %parts.status, len = bytes.len(), "Binary response body"),
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
