use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        adoption::{AdoptionDto, RegisterAdoptionRequest, UpdateAdoptionStatusRequest},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        controller::util::{
            identity::{get_identity, require_role},
            json::ApiJson,
        },
        error::Error,
        identity::Role,
        model::app::AppState,
        service::adoption::AdoptionService,
    },
};

pub static ADOPTION_TAG: &str = "adoption";

/// Apply to adopt a pet
#[utoipa::path(
    post,
    path = "/api/adoptions",
    tag = ADOPTION_TAG,
    request_body = RegisterAdoptionRequest,
    responses(
        (status = 201, description = "Adoption application submitted", body = AdoptionDto),
        (status = 400, description = "Invalid request body", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_adoption(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<RegisterAdoptionRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    let application = AdoptionService::new(&state.db)
        .register_adoption(identity.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List the logged in user's adoption applications
#[utoipa::path(
    get,
    path = "/api/adoptions",
    tag = ADOPTION_TAG,
    responses(
        (status = 200, description = "The user's applications", body = Vec<AdoptionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_adoptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    let applications = AdoptionService::new(&state.db)
        .get_user_adoptions(identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// List adoption applications for pets in the logged in user's shelter
#[utoipa::path(
    get,
    path = "/api/adoptions/shelter",
    tag = ADOPTION_TAG,
    responses(
        (status = 200, description = "Applications for the shelter's pets", body = Vec<AdoptionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a shelter owner", body = ErrorDto),
        (status = 404, description = "User has no shelter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter_adoptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let applications = AdoptionService::new(&state.db)
        .get_shelter_adoptions(identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Get an adoption application by its applicant or the pet's shelter owner
#[utoipa::path(
    get,
    path = "/api/adoptions/{id}",
    tag = ADOPTION_TAG,
    params(("id" = i32, Path, description = "Adoption application ID")),
    responses(
        (status = 200, description = "Adoption application", body = AdoptionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Neither the applicant nor the shelter owner", body = ErrorDto),
        (status = 404, description = "Adoption application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_adoption(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    let application = AdoptionService::new(&state.db)
        .get_adoption(identity.user_id, application_id)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Approve or decline an adoption application for a pet in the logged in user's shelter
#[utoipa::path(
    put,
    path = "/api/adoptions/{id}/status",
    tag = ADOPTION_TAG,
    params(("id" = i32, Path, description = "Adoption application ID")),
    request_body = UpdateAdoptionStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = AdoptionDto),
        (status = 400, description = "Invalid request body or status", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of the pet's shelter", body = ErrorDto),
        (status = 404, description = "Adoption application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_adoption_status(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    ApiJson(request): ApiJson<UpdateAdoptionStatusRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let application = AdoptionService::new(&state.db)
        .update_adoption_status(identity.user_id, application_id, request)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Withdraw one of the logged in user's adoption applications
#[utoipa::path(
    delete,
    path = "/api/adoptions/{id}",
    tag = ADOPTION_TAG,
    params(("id" = i32, Path, description = "Adoption application ID")),
    responses(
        (status = 204, description = "Adoption application withdrawn"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the applicant", body = ErrorDto),
        (status = 404, description = "Adoption application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_adoption(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = get_identity(&state, &session).await?;

    AdoptionService::new(&state.db)
        .remove_adoption(identity.user_id, application_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
