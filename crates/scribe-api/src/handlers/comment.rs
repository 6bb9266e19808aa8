//! Comment handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use scribe_core::types::{ApiResponse, CommentId, PostId};

use crate::dto::request::{CommentCreateRequest, CommentQuery, CommentUpdateRequest, PostQuery};
use crate::dto::response::{CommentResponse, DeletedResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::state::AppState;

/// POST /comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CommentCreateRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CommentResponse>>)> {
    // `required` has already rejected a missing id
    let post_id = PostId::new(req.post_id.unwrap_or_default());
    let comment = state
        .comment_service
        .create(&auth, post_id, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment.into()))))
}

/// PUT /comments
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CommentUpdateRequest>,
) -> ApiResult<Json<ApiResponse<CommentResponse>>> {
    let comment_id = CommentId::new(req.comment_id.unwrap_or_default());
    let comment = state
        .comment_service
        .update(&auth, comment_id, &req.content)
        .await?;
    Ok(Json(ApiResponse::ok(comment.into())))
}

/// DELETE /comments?cid=<id>
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<CommentQuery>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .comment_service
        .delete(&auth, CommentId::new(query.cid))
        .await?;
    Ok(Json(ApiResponse::message("Comment deleted successfully.")))
}

/// DELETE /comments/all?pid=<post id>
pub async fn delete_all_for_post(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<PostQuery>,
) -> ApiResult<Json<ApiResponse<DeletedResponse>>> {
    let deleted = state
        .comment_service
        .delete_all_for_post(&auth, PostId::new(query.pid))
        .await?;
    Ok(Json(ApiResponse::ok_with_message(
        "Comments deleted successfully.",
        DeletedResponse { deleted },
    )))
}
