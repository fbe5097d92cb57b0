// Library root for the Axum response envelope and request validation middleware

pub mod api;
pub mod config;
pub mod core;
pub mod responder;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::responder::{
    Failure, FieldSource, Reply, RequestFields, Responder, ResponderError, ResponderOptions,
    ResponseEnvelope,
};
