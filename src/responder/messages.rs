// Start of file: /src/responder/messages.rs

/*
    * Default envelope messages keyed by HTTP status code.
    * The table is built once and never mutated afterwards.
*/

use std::collections::HashMap;

use axum::http::StatusCode;
use once_cell::sync::Lazy;

static DEFAULT_MESSAGES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (200, "ok"),
        (201, "created"),
        (204, "no content"),
        (301, "not modified"),
        (400, "bad request"),
        (401, "unauthorized"),
        (403, "forbidden"),
        (404, "resource not found"),
        (405, "method not allowed"),
        (406, "not acceptable"),
        (500, "internal server error"),
        (502, "bad gateway"),
    ])
});

/// Looks up the table entry for `http_code`, if there is one.
pub fn default_message(http_code: u16) -> Option<&'static str> {
    DEFAULT_MESSAGES.get(&http_code).copied()
}

/// Message used when the caller did not supply one.
///
/// Codes missing from the table fall back to the lower-cased canonical
/// reason phrase (e.g. 408 => "request timeout"), then to an empty string.
pub fn message_for(http_code: u16) -> String {
    if let Some(message) = default_message(http_code) {
        return message.to_owned();
    }

    StatusCode::from_u16(http_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map(str::to_lowercase)
        .unwrap_or_default()
}
