//! User HTTP handlers.
//!
//! - POST /v1/users - Create a user and issue its API key (public)
//! - GET /v1/users - Return the authenticated user (behind the auth gate)

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    models::user::{CreateUserRequest, CreateUserResponse, User},
    services::user_service,
};

/// Create a new user.
///
/// # Request Body
///
/// ```json
/// { "name": "alice" }
/// ```
///
/// # Response
///
/// - **201 Created**: the user plus `api_key`, which is never shown again
/// - **400**: blank name
pub async fn create_user(
    State(pool): State<DbPool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, api_key) = user_service::create_user(&pool, &request.name).await?;

    Ok((StatusCode::CREATED, Json(CreateUserResponse { user, api_key })))
}

/// Return the user the request authenticated as.
///
/// Registered through `AuthGate::wrap`, which supplies `user`.
pub async fn get_user(_request: Request, user: User) -> Json<User> {
    Json(user)
}
