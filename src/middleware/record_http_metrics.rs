use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::telemetry;

/// Middleware recording a counter and a latency histogram for every inbound request.
///
/// Requests that match no route are labeled with the `unmatched` path to keep label
/// cardinality bounded.
pub async fn record_http_metrics(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let res = next.run(req).await;

    telemetry::record_http_request(method, path, res.status().as_u16(), started);

    res
}
