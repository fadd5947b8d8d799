//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{
    middleware::auth::{auth_middleware, optional_auth_middleware},
    state::AppState,
};

/// Submission routes
///
/// Listing and detail are public (approved entries only for anonymous
/// viewers); entering and reviewing require a token.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_submissions))
        .route("/{id}", get(handler::get_submission))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    let protected = Router::new()
        .route("/", post(handler::create_submission))
        .route("/{id}/approve", post(handler::approve_submission))
        .route("/{id}/reject", post(handler::reject_submission))
        .route("/{id}/withdraw", post(handler::withdraw_submission))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
