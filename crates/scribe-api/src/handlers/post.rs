//! Post handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use scribe_core::types::{ApiResponse, PostId};

use crate::dto::request::{CategoryQuery, PostQuery, PostRequest};
use crate::dto::response::{DeletedResponse, PostResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

fn to_responses(posts: Vec<scribe_entity::post::PostDetails>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}

/// POST /post
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PostResponse>>)> {
    let post = state.post_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.into()))))
}

/// GET /post/all
pub async fn list_all(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let posts = state.post_service.list_all().await?;
    Ok(Json(ApiResponse::ok(to_responses(posts))))
}

/// GET /post
pub async fn list_own(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let posts = state.post_service.list_own(&auth).await?;
    Ok(Json(ApiResponse::ok(to_responses(posts))))
}

/// GET /post/category?categories=a,b
pub async fn list_by_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let posts = state
        .post_service
        .list_by_categories(&query.labels())
        .await?;
    Ok(Json(ApiResponse::ok(to_responses(posts))))
}

/// PUT /post?pid=<id>
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PostQuery>,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> ApiResult<Json<ApiResponse<PostResponse>>> {
    let post = state
        .post_service
        .update(&auth, PostId::new(query.pid), req.into())
        .await?;
    Ok(Json(ApiResponse::ok(post.into())))
}

/// DELETE /post?pid=<id>
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PostQuery>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .post_service
        .delete(&auth, PostId::new(query.pid))
        .await?;
    Ok(Json(ApiResponse::message("Post deleted successfully.")))
}

/// DELETE /post/all
pub async fn delete_all_own(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<DeletedResponse>>> {
    let deleted = state.post_service.delete_all_own(&auth).await?;
    Ok(Json(ApiResponse::ok_with_message(
        "Posts deleted successfully.",
        DeletedResponse { deleted },
    )))
}
