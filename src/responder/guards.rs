// Start of file: /src/responder/guards.rs

/*
    * Route guards. Each one either forwards the request untouched or stops the
    * chain with the response its check already produced, tagged with a
    * `GuardRejection` so outer layers can tell why the handler never ran.
    *
    * Guards need the routed path params, so mount them with `route_layer`
    * inside the responder middleware.
*/

use std::{future::Future, pin::Pin, sync::Arc};

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tracing::warn;

use super::{
    fields::{
        ensure_object_ids, ensure_present, has_query_key, parse_body, path_params, query_pairs,
        FieldSource,
    },
    reply::Reply,
    responder::Responder,
    validation::missing_fields,
};
use crate::utils::error_handler::find_cause;

pub const MISSING_FIELDS: &str = "missing";
pub const INVALID_PARAM_ID: &str = "provided param ID invalid";

pub type GuardFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// Marker left on a response when a guard ended the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardRejection {
    pub reason: &'static str,
}

/// Rejects with 406 unless the JSON body has every property.
///
/// ```rust,ignore
/// .route("/users", post(create_user).route_layer(from_fn(guards::validate(&["username", "password"]))))
/// ```
pub fn validate(
    properties: &[&str],
) -> impl Fn(Request, Next) -> GuardFuture + Clone + Send + Sync + 'static {
    fields_guard(properties, FieldSource::Body)
}

/// Rejects with 406 unless the query string has every property.
pub fn validate_qs(
    properties: &[&str],
) -> impl Fn(Request, Next) -> GuardFuture + Clone + Send + Sync + 'static {
    fields_guard(properties, FieldSource::Query)
}

/// Rejects with 404 unless every path parameter is a 24-hex object id.
pub async fn validate_params(req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let responder: Responder = match Responder::from_parts(&parts) {
        Ok(responder) => responder,
        Err(err) => return err.into_response(),
    };

    let params: Vec<(String, String)> = path_params(&mut parts, &()).await;

    match ensure_object_ids(&responder, params.iter().map(|(_, value)| value)) {
        Ok(()) => next.run(Request::from_parts(parts, body)).await,
        Err(response) => reject(response, INVALID_PARAM_ID),
    }
}

fn fields_guard(
    properties: &[&str],
    source: FieldSource,
) -> impl Fn(Request, Next) -> GuardFuture + Clone + Send + Sync + 'static {
    let properties: Arc<[String]> = properties.iter().map(|name| name.to_string()).collect();

    move |req: Request, next: Next| -> GuardFuture {
        let properties: Arc<[String]> = Arc::clone(&properties);
        Box::pin(async move { check_fields(&properties, source, req, next).await })
    }
}

async fn check_fields(
    properties: &[String],
    source: FieldSource,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    let responder: Responder = match Responder::from_parts(&parts) {
        Ok(responder) => responder,
        Err(err) => return err.into_response(),
    };

    let (outcome, body) = match source {
        FieldSource::Query => {
            let query: Vec<(String, String)> = query_pairs(&parts.uri);
            let missing: Vec<&str> = missing_fields(properties, |name| has_query_key(&query, name));

            (ensure_present(&responder, &missing), body)
        }
        FieldSource::Body => {
            let bytes: Bytes = match buffer_body(&responder, body).await {
                Ok(bytes) => bytes,
                Err(response) => return response,
            };

            let fields = match parse_body(&bytes) {
                Ok(fields) => fields,
                Err(err) => {
                    warn!("Rejecting malformed JSON body: {err}");
                    return responder.respond(
                        StatusCode::BAD_REQUEST,
                        Reply::new().message("request body is not valid JSON"),
                    );
                }
            };

            let missing: Vec<&str> = missing_fields(properties, |name| fields.contains_key(name));

            (ensure_present(&responder, &missing), Body::from(bytes))
        }
    };

    match outcome {
        Ok(()) => next.run(Request::from_parts(parts, body)).await,
        Err(response) => reject(response, MISSING_FIELDS),
    }
}

async fn buffer_body(responder: &Responder, body: Body) -> Result<Bytes, Response> {
    match Limited::new(body, responder.options().body_limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => {
            if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
                warn!("Request body exceeds {} bytes", responder.options().body_limit);
                return Err(responder.respond(StatusCode::PAYLOAD_TOO_LARGE, Reply::new()));
            }

            warn!("Failed to read request body: {err}");
            Err(responder.respond(
                StatusCode::BAD_REQUEST,
                Reply::new().message("failed to read request body"),
            ))
        }
    }
}

fn reject(mut response: Response, reason: &'static str) -> Response {
    warn!("Guard stopped the request: {reason}");
    response.extensions_mut().insert(GuardRejection { reason });
    response
}
