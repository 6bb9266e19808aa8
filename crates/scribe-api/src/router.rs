//! Route definitions for the Scribe HTTP API.
//!
//! Routes are grouped by resource and merged into one router that receives
//! `AppState` through `.with_state(state)`.

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every endpoint.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(role_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Registration, login, profile update and deletion
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/u-register", post(handlers::user::register_user))
        .route("/users/a-register", post(handlers::user::register_admin))
        .route("/users/login", post(handlers::user::login))
        .route(
            "/users",
            put(handlers::user::update).delete(handlers::user::delete),
        )
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/post",
            post(handlers::post::create)
                .get(handlers::post::list_own)
                .put(handlers::post::update)
                .delete(handlers::post::delete),
        )
        .route(
            "/post/all",
            get(handlers::post::list_all).delete(handlers::post::delete_all_own),
        )
        .route("/post/category", get(handlers::post::list_by_categories))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            post(handlers::comment::create)
                .put(handlers::comment::update)
                .delete(handlers::comment::delete),
        )
        .route(
            "/comments/all",
            delete(handlers::comment::delete_all_for_post),
        )
}

/// Role administration (ADMIN only)
fn role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/roles",
            post(handlers::role::create).put(handlers::role::update),
        )
        .route("/roles/all", get(handlers::role::list))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
