//! Competition management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    middleware::auth::{auth_middleware, optional_auth_middleware},
    state::AppState,
};

/// Competition routes
///
/// Reads are public but still run the optional auth layer so
/// organizers and admins see their drafts; writes require a token.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_competitions))
        .route("/{id}", get(handler::get_competition))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    let protected = Router::new()
        .route("/", post(handler::create_competition))
        .route("/{id}", put(handler::update_competition))
        .route("/{id}", delete(handler::delete_competition))
        .route("/{id}/publish", post(handler::publish_competition))
        .route("/{id}/close", post(handler::close_competition))
        .route("/{id}/complete", post(handler::complete_competition))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
