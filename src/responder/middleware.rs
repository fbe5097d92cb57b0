// Start of file: /src/responder/middleware.rs

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

use super::{
    envelope::ResponseEnvelope,
    fields::query_pairs,
    options::ResponderOptions,
    responder::ResponderContext,
};
use crate::utils::json::to_two_space_indented_json;

/// Installs the responder context for the request and always continues.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/users", post(create_user))
///     .layer(from_fn_with_state(Arc::new(options), responder_middleware));
/// ```
pub async fn responder_middleware(
    State(options): State<Arc<ResponderOptions>>,
    mut req: Request,
    next: Next,
) -> Response {
    let callback: Option<String> = query_pairs(req.uri())
        .into_iter()
        .find(|(key, _)| *key == options.callback_name)
        .map(|(_, value)| value);

    req.extensions_mut()
        .insert(ResponderContext::new(options, callback));

    let response: Response = next.run(req).await;

    if let Some(envelope) = response.extensions().get::<ResponseEnvelope>() {
        log_envelope(response.status(), envelope);
    }

    response
}

fn log_envelope(status: StatusCode, envelope: &ResponseEnvelope) {
    match to_two_space_indented_json(envelope) {
        Ok(spaced_json) => debug!("\nEmitted {status} envelope:\n{spaced_json}"),
        Err(err) => error!("Failed to format envelope JSON: {:?}", err),
    }
}
