use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        shelter::{
            RegisterShelterRequest, ShelterDetailDto, ShelterDto, ShelterSummaryDto,
            UpdateShelterRequest,
        },
    },
    server::{
        controller::util::{
            identity::{get_identity, require_role},
            json::ApiJson,
        },
        error::Error,
        identity::Role,
        model::app::AppState,
        service::shelter::ShelterService,
    },
};

pub static SHELTER_TAG: &str = "shelter";

/// Register a shelter owned by the logged in user
///
/// The user is granted the ShelterOwner role. Each user can own a single shelter.
#[utoipa::path(
    post,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    request_body = RegisterShelterRequest,
    responses(
        (status = 201, description = "Shelter registered", body = ShelterDto),
        (status = 400, description = "Invalid request", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "User already has a shelter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_shelter(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<RegisterShelterRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    let shelter_service = ShelterService::new(&state.db, state.identity.as_ref());
    let shelter = shelter_service
        .register_shelter(identity.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(shelter)))
}

/// List all shelters with their pet counts
#[utoipa::path(
    get,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    responses(
        (status = 200, description = "All shelters", body = Vec<ShelterSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_shelters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let shelter_service = ShelterService::new(&state.db, state.identity.as_ref());
    let shelters = shelter_service.get_all_shelters().await?;

    Ok((StatusCode::OK, Json(shelters)))
}

/// Get a shelter with its pets
#[utoipa::path(
    get,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    responses(
        (status = 200, description = "Shelter with its pets", body = ShelterDetailDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter(
    State(state): State<AppState>,
    Path(shelter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let shelter_service = ShelterService::new(&state.db, state.identity.as_ref());
    let shelter = shelter_service.get_shelter(shelter_id).await?;

    Ok((StatusCode::OK, Json(shelter)))
}

/// Update fields of the logged in user's shelter, omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    request_body = UpdateShelterRequest,
    responses(
        (status = 200, description = "Shelter updated", body = ShelterDto),
        (status = 400, description = "Invalid request", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the shelter owner", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shelter(
    State(state): State<AppState>,
    session: Session,
    Path(shelter_id): Path<i32>,
    ApiJson(request): ApiJson<UpdateShelterRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let shelter_service = ShelterService::new(&state.db, state.identity.as_ref());
    let shelter = shelter_service
        .update_shelter(identity.user_id, shelter_id, request)
        .await?;

    Ok((StatusCode::OK, Json(shelter)))
}

/// Remove the logged in user's shelter along with its pets
///
/// The ShelterOwner role is revoked afterwards. A failed revocation is logged and does not
/// fail the request since the shelter is already removed.
#[utoipa::path(
    delete,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    responses(
        (status = 204, description = "Shelter removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the shelter owner", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_shelter(
    State(state): State<AppState>,
    session: Session,
    Path(shelter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let shelter_service = ShelterService::new(&state.db, state.identity.as_ref());
    shelter_service
        .remove_shelter(identity.user_id, shelter_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
