use axum::http::StatusCode;

/// Body returned by every successful call to GET /read.
pub const GREETING: &str = "have a nice day";

/// GET /read handler - Return the fixed greeting
///
/// Takes no parameters and ignores the request entirely. Always
/// succeeds; there is no error path and no state to mutate.
pub async fn read_handler() -> (StatusCode, &'static str) {
    tracing::debug!("serving greeting");
    (StatusCode::OK, GREETING)
}
