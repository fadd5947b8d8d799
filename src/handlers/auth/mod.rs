//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{middleware, routing::{get, post}, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Auth routes
///
/// Register, login, and refresh are reachable without a token; logout
/// and /me require one.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/refresh", post(handler::refresh_token));

    let protected = Router::new()
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::get_current_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
