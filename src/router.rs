use axum::{
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    controller::{category, comment, review, user},
    model::api::ErrorDto,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(category::get_categories))
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::post_review),
        )
        .route(
            "/api/reviews/{review_id}",
            get(review::get_review_by_id).patch(review::patch_review_votes),
        )
        .route(
            "/api/reviews/{review_id}/comments",
            get(comment::get_review_comments).post(comment::post_review_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            axum::routing::patch(comment::patch_comment_votes).delete(comment::delete_comment),
        )
        .route("/api/users", get(user::get_users))
        .route("/api/users/{username}", get(user::get_user_by_username))
        .fallback(path_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Constant response for every unmatched path.
async fn path_not_found() -> (StatusCode, Json<ErrorDto>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            msg: "path not found".to_string(),
        }),
    )
}
