// Demo route definitions

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use crate::responder::guards;
use super::handler;

/// Creates router with endpoints exercising every responder operation
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handler::ping_handler))
        // Validates inside the handler
        .route("/users", post(handler::create_user_handler))
        // Only GET is guarded; DELETE checks the id itself
        .route(
            "/users/{id}",
            get(handler::get_user_handler)
                .route_layer(from_fn(guards::validate_params))
                .delete(handler::delete_user_handler),
        )
        .route(
            "/accounts",
            post(handler::create_account_handler)
                .route_layer(from_fn(guards::validate(&["email", "password"]))),
        )
        .route(
            "/search",
            get(handler::search_handler)
                .route_layer(from_fn(guards::validate_qs(&["q"]))),
        )
        .route("/private", get(handler::private_handler))
        .route("/admin", get(handler::admin_handler))
        .route("/crash", get(handler::crash_handler))
}
