use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::user::{UserResponseDto, UsersResponseDto},
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UsersResponseDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UsersResponseDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get a single user by username.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `username` - Username from the path
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserResponseDto),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_username(&username).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            user: user.into_dto(),
        }),
    ))
}
