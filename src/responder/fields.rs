// Start of file: /src/responder/fields.rs

/*
    * Request side of the middleware: the parsed body, query and path params
    * of one request, plus the validators that answer for the handler when a
    * check fails.
*/

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request},
    http::{request::Parts, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{
    options::IdValidation,
    reply::Reply,
    responder::Responder,
    validation::{all_object_ids, missing_fields, missing_fields_message},
};

/// Where `validate` looks for mandatory fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Body,
    Query,
}

/// Extractor giving handlers the request fields and the validation helpers.
///
/// Consumes the body, so it must be the last extractor of a handler.
#[derive(Debug, Clone)]
pub struct RequestFields {
    body: Map<String, Value>,
    query: Vec<(String, String)>,
    params: Vec<(String, String)>,
    responder: Responder,
}

impl RequestFields {
    /// JSON body fields; empty for an empty or non-object body.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Query parameters in the order they appear in the URI.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Routed path parameters in route order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Checks that every name in `mandatory` is a key of `source`.
    ///
    /// On failure the error is the 406 response already built for the
    /// handler to return; nothing else should be emitted afterwards.
    pub fn validate<S: AsRef<str>>(&self, mandatory: &[S], source: FieldSource) -> Result<(), Response> {
        let missing: Vec<&str> = match source {
            FieldSource::Body => missing_fields(mandatory, |name| self.body.contains_key(name)),
            FieldSource::Query => missing_fields(mandatory, |name| has_query_key(&self.query, name)),
        };

        ensure_present(&self.responder, &missing)
    }

    /// Checks that every id looks like a 24-hex object id, answering 404 otherwise.
    pub fn validate_ids<I, T>(&self, ids: I) -> Result<(), Response>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        ensure_object_ids(&self.responder, ids)
    }
}

impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let responder: Responder = Responder::from_parts(&parts).map_err(IntoResponse::into_response)?;
        let query: Vec<(String, String)> = query_pairs(&parts.uri);
        let params: Vec<(String, String)> = path_params(&mut parts, state).await;

        let bytes: Bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|rejection| {
                warn!("Failed to read request body: {}", rejection.body_text());
                responder.respond(rejection.status(), Reply::new().message(rejection.body_text()))
            })?;

        let body: Map<String, Value> = parse_body(&bytes).map_err(|err| {
            warn!("Rejecting malformed JSON body: {err}");
            responder.respond(
                StatusCode::BAD_REQUEST,
                Reply::new().message("request body is not valid JSON"),
            )
        })?;

        Ok(Self {
            body,
            query,
            params,
            responder,
        })
    }
}

pub(crate) fn ensure_present(responder: &Responder, missing: &[&str]) -> Result<(), Response> {
    match missing_fields_message(missing) {
        None => Ok(()),
        Some(message) => {
            warn!("Rejecting request: {message}");
            Err(responder.not_acceptable(Some(&message)))
        }
    }
}

pub(crate) fn ensure_object_ids<I, T>(responder: &Responder, ids: I) -> Result<(), Response>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    if responder.options().id_validation == IdValidation::Disabled {
        debug!("Id validation disabled; skipping id check");
        return Ok(());
    }

    if all_object_ids(ids) {
        return Ok(());
    }

    warn!("Rejecting request: malformed object id");
    Err(responder.not_found())
}

pub(crate) fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default()
}

pub(crate) fn has_query_key(query: &[(String, String)], name: &str) -> bool {
    query.iter().any(|(key, _)| key == name)
}

pub(crate) async fn path_params<S>(parts: &mut Parts, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    RawPathParams::from_request_parts(parts, state)
        .await
        .map(|params| {
            params
                .iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect()
        })
        .unwrap_or_default()
}

/// Parses a JSON body into its fields; blank and non-object bodies have none.
pub(crate) fn parse_body(bytes: &[u8]) -> serde_json::Result<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(fields) => Ok(fields),
        _ => Ok(Map::new()),
    }
}
