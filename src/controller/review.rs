use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    model::review::{CreateReviewParams, ReviewResponseDto, ReviewsResponseDto},
    query::ReviewListQuery,
    service::review::ReviewService,
    state::AppState,
    util::{
        parse::parse_id,
        validate::{check_shape, require_i32, require_str, FieldKind, Shape},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Declared body shape for review creation, in reporting order.
const CREATE_REVIEW_SHAPE: &Shape = &[
    ("owner", FieldKind::String),
    ("designer", FieldKind::String),
    ("review_body", FieldKind::String),
    ("category", FieldKind::String),
    ("title", FieldKind::String),
];

/// Declared body shape for vote increments.
const INC_VOTES_SHAPE: &Shape = &[("inc_votes", FieldKind::Number)];

/// Get the reviews list with filtering, sorting, and pagination.
///
/// Accepts `category`, `sort_by`, `order`, `limit`, and `p`; anything else is
/// ignored. Responds with the requested page of review summaries and the
/// `total_count` of the full filtered sequence.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Raw query parameters
///
/// # Returns
/// - `200 OK` - Page of review summaries plus total_count
/// - `400 Bad Request` - Invalid sort column, order, limit, or page
/// - `404 Not Found` - Unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(
        ("category" = Option<String>, Query, description = "Filter by category slug"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by (default created_at)"),
        ("order" = Option<String>, Query, description = "ASC or DESC, case-insensitive (default DESC)"),
        ("limit" = Option<String>, Query, description = "Page size (default 10)"),
        ("p" = Option<String>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = ReviewsResponseDto),
        (status = 400, description = "Invalid sort, order, limit, or page", body = crate::model::api::ErrorDto),
        (status = 404, description = "Category not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let page = service.list(&query).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewsResponseDto {
            reviews: page.items.into_iter().map(|r| r.into_dto()).collect(),
            total_count: page.total_count,
        }),
    ))
}

/// Get a single review by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw review id from the path
///
/// # Returns
/// - `200 OK` - The review with its live comment count
/// - `400 Bad Request` - Malformed review id
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewResponseDto),
        (status = 400, description = "Malformed review id", body = crate::model::api::ErrorDto),
        (status = 404, description = "Review not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id, "review_id")?;

    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(review_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}

/// Create a new review.
///
/// The body must carry owner, designer, review_body, category, and title as
/// strings; every shape violation is reported in one message. Fields outside
/// the shape are ignored, and the id, timestamp, image, and vote count are
/// server-assigned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Raw JSON request body
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Missing or mistyped body fields
/// - `404 Not Found` - Unknown owner or category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewResponseDto),
        (status = 400, description = "Missing or mistyped body fields", body = crate::model::api::ErrorDto),
        (status = 404, description = "Owner or category not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn post_review(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    check_shape(&payload, CREATE_REVIEW_SHAPE)?;

    let params = CreateReviewParams {
        owner: require_str(&payload, "owner")?,
        designer: require_str(&payload, "designer")?,
        review_body: require_str(&payload, "review_body")?,
        category: require_str(&payload, "category")?,
        title: require_str(&payload, "title")?,
    };

    let service = ReviewService::new(&state.db);

    let review = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}

/// Apply a relative vote change to a review.
///
/// The body must carry `inc_votes` as a number; the increment is applied
/// atomically by the storage engine.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw review id from the path
/// - `payload` - Raw JSON request body
///
/// # Returns
/// - `202 Accepted` - The review after the increment
/// - `400 Bad Request` - Malformed review id or inc_votes
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 202, description = "Successfully updated review votes", body = ReviewResponseDto),
        (status = 400, description = "Malformed review id or inc_votes", body = crate::model::api::ErrorDto),
        (status = 404, description = "Review not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn patch_review_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id, "review_id")?;

    check_shape(&payload, INC_VOTES_SHAPE)?;
    let delta = require_i32(&payload, "inc_votes")?;

    let service = ReviewService::new(&state.db);

    let review = service.increment_votes(review_id, delta).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}
