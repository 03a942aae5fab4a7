pub mod cors;
pub mod request_tracing;

use axum::extract::DefaultBodyLimit;

/// Cap request bodies at `max_bytes`. Oversized bodies surface as a
/// `JsonRejection` and render as `payloadTooLarge`.
pub fn body_limit_layer(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}
