use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    model::comment::{CommentResponseDto, CommentsResponseDto, CreateCommentParams},
    query::page::PageQuery,
    service::comment::CommentService,
    state::AppState,
    util::{
        parse::parse_id,
        validate::{check_shape, require_i32, require_str, FieldKind, Shape},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Declared body shape for comment creation, in reporting order.
///
/// The review id comes from the path and is merged into the record before the
/// check so the whole shape is validated in one pass.
const CREATE_COMMENT_SHAPE: &Shape = &[
    ("body", FieldKind::String),
    ("username", FieldKind::String),
    ("review_id", FieldKind::Number),
];

/// Declared body shape for vote increments.
const INC_VOTES_SHAPE: &Shape = &[("inc_votes", FieldKind::Number)];

/// Get one page of a review's comments.
///
/// Accepts `limit` and `p`; comments come back newest first together with the
/// review's full comment count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw review id from the path
/// - `query` - Raw pagination parameters
///
/// # Returns
/// - `200 OK` - Page of comments plus total_count
/// - `400 Bad Request` - Malformed review id, limit, or page
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = String, Path, description = "Review id"),
        ("limit" = Option<String>, Query, description = "Page size (default 10)"),
        ("p" = Option<String>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsResponseDto),
        (status = 400, description = "Malformed review id, limit, or page", body = crate::model::api::ErrorDto),
        (status = 404, description = "Review not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id, "review_id")?;

    let service = CommentService::new(&state.db);

    let page = service.list_for_review(review_id, &query).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsResponseDto {
            comments: page.items.into_iter().map(|c| c.into_dto()).collect(),
            total_count: page.total_count,
        }),
    ))
}

/// Create a comment on a review.
///
/// The body must carry `body` and `username` as strings; the review id from
/// the path completes the declared shape. Fields outside the shape, including
/// any submitted votes or created_at, are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw review id from the path
/// - `payload` - Raw JSON request body
///
/// # Returns
/// - `201 Created` - The created comment with zero votes
/// - `400 Bad Request` - Malformed review id or body fields
/// - `404 Not Found` - Unknown review or username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 201, description = "Successfully created comment", body = CommentResponseDto),
        (status = 400, description = "Malformed review id or body fields", body = crate::model::api::ErrorDto),
        (status = 404, description = "Review or username not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn post_review_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id, "review_id")?;

    // The path id joins the record under the declared shape; a client-supplied
    // review_id field is overridden, not trusted.
    let mut record = payload;
    if let Value::Object(ref mut map) = record {
        map.insert("review_id".to_string(), Value::from(review_id));
    }

    check_shape(&record, CREATE_COMMENT_SHAPE)?;

    let params = CreateCommentParams {
        review_id,
        author: require_str(&record, "username")?,
        body: require_str(&record, "body")?,
    };

    let service = CommentService::new(&state.db);

    let comment = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Apply a relative vote change to a comment.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Raw comment id from the path
/// - `payload` - Raw JSON request body
///
/// # Returns
/// - `202 Accepted` - The comment after the increment
/// - `400 Bad Request` - Malformed comment id or inc_votes
/// - `404 Not Found` - No comment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 202, description = "Successfully updated comment votes", body = CommentResponseDto),
        (status = 400, description = "Malformed comment id or inc_votes", body = crate::model::api::ErrorDto),
        (status = 404, description = "Comment not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    check_shape(&payload, INC_VOTES_SHAPE)?;
    let delta = require_i32(&payload, "inc_votes")?;

    let service = CommentService::new(&state.db);

    let comment = service.increment_votes(comment_id, delta).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(CommentResponseDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Delete a comment.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Raw comment id from the path
///
/// # Returns
/// - `204 No Content` - The comment was deleted
/// - `400 Bad Request` - Malformed comment id
/// - `404 Not Found` - No comment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 400, description = "Malformed comment id", body = crate::model::api::ErrorDto),
        (status = 404, description = "Comment not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(&state.db);

    service.delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
