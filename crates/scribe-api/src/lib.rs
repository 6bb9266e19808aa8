//! # scribe-api
//!
//! HTTP API layer for Scribe built on Axum.
//!
//! Provides the REST endpoints, bearer-token and validated-body extractors,
//! request/response DTOs, CORS and logging middleware, and the mapping from
//! `AppError` to the `{ success, message, data }` envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
