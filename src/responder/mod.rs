// Start of file: /src/responder/mod.rs

/*
    * Response envelope and request validation middleware.
    *
    * `responder_middleware` installs a per-request context; handlers then
    * extract a `Responder` (response side) or `RequestFields` (request side),
    * and `guards` reject bad requests before a handler runs.
*/

pub mod envelope;
pub mod error;
pub mod failure;
pub mod fields;
pub mod guards;
pub mod jsonp;
pub mod messages;
pub mod middleware;
pub mod options;
pub mod reply;
#[allow(clippy::module_inception)]
pub mod responder;
pub mod validation;

pub use envelope::ResponseEnvelope;
pub use error::ResponderError;
pub use failure::{FieldError, Failure};
pub use fields::{FieldSource, RequestFields};
pub use guards::GuardRejection;
pub use middleware::responder_middleware;
pub use options::{IdValidation, JsonpMode, ResponderOptions};
pub use reply::Reply;
pub use responder::{Responder, ResponderContext};

// End of file: /src/responder/mod.rs
