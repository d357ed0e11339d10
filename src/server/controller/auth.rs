use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{IdentityDto, LoginRequest},
        user::{RegisterUserRequest, UserDto},
    },
    server::{
        controller::util::{identity::get_identity, json::ApiJson},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create a new user account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User account created", body = UserDto),
        (status = 400, description = "Invalid request, email taken, or password too weak", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db, state.identity.as_ref());
    let user = user_service.register_user(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
///
/// Starts a new session for the user, the session ID is cycled to prevent session fixation.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid request", body = ValidationErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(state.identity.as_ref());
    let user = auth_service.login(request).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Log out and end the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Flushing a session which was never stored fails, only flush when logged in
    if SessionUserId::get(&session).await?.is_some() {
        session.flush().await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user and their roles
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = IdentityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    Ok((StatusCode::OK, Json(IdentityDto::from(identity))))
}
