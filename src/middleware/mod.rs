pub mod method_not_allowed;
pub mod not_found;
pub mod record_http_metrics;
pub mod trace_response_body;
