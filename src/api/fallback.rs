// Start of file: /src/api/fallback.rs

use axum::response::Response;
use tracing::instrument;

use crate::responder::Responder;

/// Answers unknown routes with the 404 envelope
#[instrument(skip_all)]
pub async fn fallback_handler(res: Responder) -> Response {
    res.not_found()
}

// End of file: /src/api/fallback.rs
