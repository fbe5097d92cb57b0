// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::Response,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::{error, warn};

use crate::responder::envelope::{self, ResponseEnvelope};

/// Maps errors raised by the outer layers to envelope responses
pub async fn handle_global_error(err: BoxError) -> Response {
    let status: StatusCode = global_error_status(&err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Unhandled internal error: {err}");
    } else {
        warn!("Request failed in middleware with {status}: {err}");
    }

    envelope::emit(status, ResponseEnvelope::from_status(status, None, None, None), None)
}

fn global_error_status(err: &BoxError) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&**err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();
    
    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
