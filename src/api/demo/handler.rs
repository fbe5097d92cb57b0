// Demo handlers built on the responder middleware

use anyhow::anyhow;
use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::responder::{
    Failure, FieldSource, Reply, RequestFields, Responder, ResponderError,
};

// Well-formed id that never matches a stored user
pub const UNKNOWN_USER_ID: &str = "000000000000000000000000";

/// Liveness check
#[instrument(skip_all)]
pub async fn ping_handler(res: Responder) -> Response {
    info!("Ping endpoint called");
    res.ok(json!({ "pong": true }))
}

/// Creates a user once `username` and `password` are present
#[instrument(skip_all)]
pub async fn create_user_handler(fields: RequestFields) -> Result<Response, Response> {
    fields.validate(&["username", "password"], FieldSource::Body)?;

    let username: Value = fields.body().get("username").cloned().unwrap_or(Value::Null);
    info!("Creating user {username}");

    fields
        .responder()
        .ok_with(
            Reply::new()
                .status(201)
                .payload(json!({ "username": username }))
                .message("user created"),
        )
        .map_err(IntoResponse::into_response)
}

/// Fetches a user; the id shape was already checked by `validate_params`
#[instrument(skip_all)]
pub async fn get_user_handler(res: Responder, Path(id): Path<String>) -> Response {
    if id == UNKNOWN_USER_ID {
        return res.error(Failure::NotFound);
    }

    res.ok(json!({ "id": id }))
}

/// Deletes a user after checking the id inline
#[instrument(skip_all)]
pub async fn delete_user_handler(fields: RequestFields) -> Result<Response, Response> {
    fields.validate_ids(fields.params().iter().map(|(_, value)| value))?;

    fields
        .responder()
        .ok_with(Reply::new().message("user deleted"))
        .map_err(IntoResponse::into_response)
}

/// Registers an account; mandatory fields are enforced by the route guard
#[instrument(skip_all)]
pub async fn create_account_handler(fields: RequestFields) -> Response {
    let email: &str = fields
        .body()
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if !email.contains('@') {
        let failure: Failure = Failure::field_validation([
            ("email", format!("`{email}` is not a valid email address")),
        ]);
        return fields
            .responder()
            .error_with(failure, Reply::new().response_code(4001));
    }

    fields.responder().ok(json!({ "email": email }))
}

/// Searches by `q`, answering as JSONP when a callback is given
#[instrument(skip_all)]
pub async fn search_handler(fields: RequestFields) -> Result<Response, ResponderError> {
    let query: &str = fields
        .query()
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    fields
        .responder()
        .ok_with(Reply::new().payload(json!({ "query": query, "results": [] })).jsonp())
}

#[instrument(skip_all)]
pub async fn private_handler(res: Responder) -> Response {
    res.unauthorized_with(Reply::new().message("a valid session is required").jsonp())
}

#[instrument(skip_all)]
pub async fn admin_handler(res: Responder) -> Response {
    res.forbidden(None)
}

/// Simulates an upstream failure surfacing as a 500 envelope
#[instrument(skip_all)]
pub async fn crash_handler(res: Responder) -> Response {
    res.error_with(
        anyhow!("upstream service unavailable"),
        Reply::new().response_code(5001).payload(json!({ "retry": true })),
    )
}
