// Start of file: /src/responder/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use super::envelope::{self, ResponseEnvelope};

/// Programmer errors raised while building or emitting an envelope.
///
/// These never come from client input. A handler may still propagate one
/// with `?`, in which case it is logged and answered with a bare 500 envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponderError {
    #[error("cannot generate response envelope without an http status code")]
    MissingStatus,

    #[error("{0} is not a valid http status code")]
    InvalidStatus(u16),

    #[error("cannot respond ok with http status {0}, expected 2xx")]
    NonSuccessStatus(u16),

    #[error("responder middleware is not installed on this route")]
    MiddlewareMissing,
}

impl IntoResponse for ResponderError {
    fn into_response(self) -> Response {
        error!("Responder misuse: {self}");

        let status: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
        envelope::emit(status, ResponseEnvelope::from_status(status, None, None, None), None)
    }
}
