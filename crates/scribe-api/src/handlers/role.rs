//! Role administration handlers. All require the ADMIN role.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use scribe_core::types::ApiResponse;

use crate::dto::request::{RoleQuery, RoleRequest};
use crate::dto::response::RoleResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// POST /roles
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RoleResponse>>)> {
    let role = state
        .role_service
        .create(&auth, &req.role_name, &req.role_description)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(role.into()))))
}

/// PUT /roles?roleName=<current name>
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<RoleQuery>,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> ApiResult<Json<ApiResponse<RoleResponse>>> {
    let role = state
        .role_service
        .update(&auth, &query.role_name, &req.role_name, &req.role_description)
        .await?;
    Ok(Json(ApiResponse::ok(role.into())))
}

/// GET /roles/all
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<RoleResponse>>>> {
    let roles = state.role_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(
        roles.into_iter().map(RoleResponse::from).collect(),
    )))
}
