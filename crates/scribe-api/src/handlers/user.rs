//! User handlers: registration, login, profile update and deletion.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use scribe_core::error::AppError;
use scribe_core::types::ApiResponse;
use scribe_entity::role::{ADMIN, USER};
use scribe_service::UserInput;

use crate::dto::request::{LoginRequest, UserQuery, UserRequest};
use crate::dto::response::{LoginResponse, RegistrationResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

fn user_input(req: UserRequest) -> Result<UserInput, AppError> {
    req.into_input().ok_or_else(|| {
        AppError::validation("Date of birth is required.")
            .with_details(serde_json::json!({ "dateOfBirth": "Date of birth is required." }))
    })
}

/// POST /users/u-register
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RegistrationResponse>>)> {
    let outcome = state.user_service.register(user_input(req)?, USER).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegistrationResponse::new(
            outcome.user,
            outcome.token,
        ))),
    ))
}

/// POST /users/a-register
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RegistrationResponse>>)> {
    if !state.config.auth.admin_registration_enabled {
        return Err(AppError::not_found("Administrator registration is disabled.").into());
    }

    let outcome = state.user_service.register(user_input(req)?, ADMIN).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegistrationResponse::new(
            outcome.user,
            outcome.token,
        ))),
    ))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let outcome = state
        .user_service
        .login(&req.username, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token,
    })))
}

/// PUT /users?un=<email>
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserQuery>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update(&auth, &query.un, user_input(req)?)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /users?un=<email>
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserQuery>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.user_service.delete(&auth, &query.un).await?;
    Ok(Json(ApiResponse::message("User deleted successfully.")))
}
