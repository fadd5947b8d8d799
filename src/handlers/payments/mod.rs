//! Payment handlers

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

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Payment routes
///
/// The webhook is authenticated by a shared secret header instead of a
/// bearer token; everything else requires a token.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/webhook", post(handler::payment_webhook));

    let protected = Router::new()
        .route("/", post(handler::initiate_payment))
        .route("/", get(handler::list_payments))
        .route("/{id}", get(handler::get_payment))
        .route("/{id}/refund", post(handler::refund_payment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
