// Start of file: /src/responder/responder.rs

/*
    * Response side of the middleware. Handlers extract a `Responder` and
    * finish with exactly one of its operations; each returns the response.
*/

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::Response,
};
use serde_json::Value;

use super::{
    envelope::{self, ResponseEnvelope},
    error::ResponderError,
    failure::Failure,
    jsonp::sanitize_callback,
    options::{JsonpMode, ResponderOptions},
    reply::Reply,
};

/// Per-request data installed by the responder middleware.
#[derive(Debug, Clone)]
pub struct ResponderContext {
    pub(crate) options: Arc<ResponderOptions>,
    // Raw value of the callback query parameter, if the request carried one
    pub(crate) callback: Option<String>,
}

impl ResponderContext {
    pub fn new(options: Arc<ResponderOptions>, callback: Option<String>) -> Self {
        Self { options, callback }
    }
}

#[derive(Debug, Clone)]
pub struct Responder {
    context: ResponderContext,
}

impl Responder {
    /// Reads the context the middleware left in the request extensions.
    pub fn from_parts(parts: &Parts) -> Result<Self, ResponderError> {
        parts
            .extensions
            .get::<ResponderContext>()
            .cloned()
            .map(|context| Self { context })
            .ok_or(ResponderError::MiddlewareMissing)
    }

    pub fn options(&self) -> &ResponderOptions {
        &self.context.options
    }

    /// 200 with the default message.
    pub fn ok(&self, payload: impl Into<Value>) -> Response {
        self.respond(StatusCode::OK, Reply::new().payload(payload))
    }

    /// Success with a custom 2xx status (200 when unset), message, code or JSONP.
    pub fn ok_with(&self, reply: Reply) -> Result<Response, ResponderError> {
        let http_code: u16 = reply.status.filter(|code| *code != 0).unwrap_or(200);

        if !(200..=299).contains(&http_code) {
            return Err(ResponderError::NonSuccessStatus(http_code));
        }

        let status: StatusCode =
            StatusCode::from_u16(http_code).map_err(|_| ResponderError::InvalidStatus(http_code))?;

        Ok(self.respond(status, reply))
    }

    pub fn not_found(&self) -> Response {
        self.respond(StatusCode::NOT_FOUND, Reply::new())
    }

    /// 500 carrying the failure's message.
    pub fn error(&self, failure: impl Into<Failure>) -> Response {
        self.error_with(failure, Reply::new())
    }

    /// Like [`Responder::error`], with a payload, response code or JSONP from `reply`.
    pub fn error_with(&self, failure: impl Into<Failure>, reply: Reply) -> Response {
        let failure: Failure = failure.into();

        let message: Option<String> = match &failure {
            Failure::NotFound => return self.not_found(),
            Failure::Unspecified | Failure::Message(_) | Failure::FieldValidation(_) => {
                failure.message()
            }
        };

        let reply: Reply = Reply {
            message: message.or(reply.message),
            ..reply
        };

        self.respond(StatusCode::INTERNAL_SERVER_ERROR, reply)
    }

    pub fn unauthorized(&self, message: Option<&str>) -> Response {
        self.unauthorized_with(Reply {
            message: message.map(str::to_owned),
            ..Reply::new()
        })
    }

    /// 401 honoring the message and JSONP flag of `reply`.
    pub fn unauthorized_with(&self, reply: Reply) -> Response {
        let reply: Reply = Reply {
            message: reply.message,
            jsonp: reply.jsonp,
            ..Reply::new()
        };

        self.respond(StatusCode::UNAUTHORIZED, reply)
    }

    pub fn forbidden(&self, message: Option<&str>) -> Response {
        self.respond_message(StatusCode::FORBIDDEN, message)
    }

    pub fn not_acceptable(&self, message: Option<&str>) -> Response {
        self.respond_message(StatusCode::NOT_ACCEPTABLE, message)
    }

    fn respond_message(&self, status: StatusCode, message: Option<&str>) -> Response {
        self.respond(
            status,
            Reply {
                message: message.map(str::to_owned),
                ..Reply::new()
            },
        )
    }

    pub(crate) fn respond(&self, status: StatusCode, reply: Reply) -> Response {
        let callback: Option<String> = if reply.jsonp { self.jsonp_callback() } else { None };

        let envelope: ResponseEnvelope =
            ResponseEnvelope::from_status(status, reply.payload, reply.message, reply.response_code);

        envelope::emit(status, envelope, callback.as_deref())
    }

    fn jsonp_callback(&self) -> Option<String> {
        match self.context.options.jsonp {
            JsonpMode::Enabled => self.context.callback.as_deref().and_then(sanitize_callback),
            JsonpMode::Disabled => None,
        }
    }
}

impl<S> FromRequestParts<S> for Responder
where
    S: Send + Sync,
{
    type Rejection = ResponderError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts)
    }
}
