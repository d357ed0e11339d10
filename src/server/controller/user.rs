use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::identity::get_identity, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the logged in user's account
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the logged in user's account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    let user = UserService::new(&state.db, state.identity.as_ref())
        .get_user(identity.user_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete the logged in user's account
///
/// Removes the user's shelter, pets, and adoption applications, and ends the session.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User account deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the logged in user's account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    UserService::new(&state.db, state.identity.as_ref())
        .remove_user(identity.user_id, user_id)
        .await?;

    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}
