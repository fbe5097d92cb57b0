// Start of file: /src/responder/envelope.rs

/*
    * The `{ code, message, payload }` envelope every responder operation emits,
    * and the single place where an envelope is turned into an HTTP response.
*/

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{error::ResponderError, jsonp, messages::message_for};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    // Application response code, or the HTTP status when none was given.
    pub code: u32,
    // Caller message, or the default message for the HTTP status.
    pub message: String,
    // Arbitrary JSON payload, `null` when absent.
    pub payload: Value,
}

impl ResponseEnvelope {
    /// Builds an envelope from a raw status code.
    ///
    /// A zero `http_code` means no status was supplied and is rejected with
    /// [`ResponderError::MissingStatus`]; a code outside `100..=999` is
    /// [`ResponderError::InvalidStatus`]. A zero `response_code` or an empty
    /// `message` count as absent and fall back to their defaults.
    pub fn build(
        http_code: u16,
        payload: Option<Value>,
        message: Option<String>,
        response_code: Option<u32>,
    ) -> Result<Self, ResponderError> {
        if http_code == 0 {
            return Err(ResponderError::MissingStatus);
        }

        let status: StatusCode =
            StatusCode::from_u16(http_code).map_err(|_| ResponderError::InvalidStatus(http_code))?;

        Ok(Self::from_status(status, payload, message, response_code))
    }

    /// Same as [`ResponseEnvelope::build`] for a status that is known to be valid.
    pub fn from_status(
        status: StatusCode,
        payload: Option<Value>,
        message: Option<String>,
        response_code: Option<u32>,
    ) -> Self {
        let http_code: u16 = status.as_u16();

        Self {
            code: response_code
                .filter(|code| *code != 0)
                .unwrap_or(u32::from(http_code)),
            message: message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| message_for(http_code)),
            payload: payload.unwrap_or(Value::Null),
        }
    }
}

/// Writes `envelope` with `status`, as JSONP when a sanitized callback is given.
///
/// The envelope is also stored in the response extensions for the middleware.
pub(crate) fn emit(
    status: StatusCode,
    envelope: ResponseEnvelope,
    callback: Option<&str>,
) -> Response {
    let mut response: Response = match callback {
        Some(callback) => jsonp::render(status, callback, &envelope),
        None => (status, Json(&envelope)).into_response(),
    };

    response.extensions_mut().insert(envelope);
    response
}
