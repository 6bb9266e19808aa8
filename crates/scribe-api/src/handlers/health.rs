//! Health check handler.

use axum::Json;
use axum::extract::State;

use scribe_core::types::ApiResponse;

use crate::dto::response::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<HealthResponse>>> {
    let store = match &state.db_pool {
        Some(pool) => {
            pool.health_check().await?;
            "postgres"
        }
        None => "memory",
    };

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    })))
}
