// Start of file: /src/responder/jsonp.rs

/*
    * JSONP rendering of an envelope, matching the classic Express `res.jsonp`
    * output so existing browser clients keep working.
*/

use axum::{
    http::{
        header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use tracing::error;

use super::envelope::ResponseEnvelope;

const JAVASCRIPT_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

/// Strips everything but `[A-Za-z0-9_$.\[\]]` from a callback name.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_callback(raw: &str) -> Option<String> {
    let callback: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']'))
        .collect();

    (!callback.is_empty()).then_some(callback)
}

/// Renders `envelope` as a guarded callback invocation.
///
/// `callback` must already be sanitized.
pub fn render(status: StatusCode, callback: &str, envelope: &ResponseEnvelope) -> Response {
    let json: String = serde_json::to_string(envelope).unwrap_or_else(|err| {
        error!("Failed to serialize envelope for JSONP: {err}");
        "null".to_owned()
    });

    // U+2028 and U+2029 are valid in JSON strings but terminate JavaScript lines
    let json: String = json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");

    let body: String = format!("/**/ typeof {callback} === 'function' && {callback}({json});");

    (
        status,
        [
            (CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT_CONTENT_TYPE)),
            (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        ],
        body,
    )
        .into_response()
}
