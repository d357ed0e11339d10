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
        pet::{PetDto, RegisterPetRequest, UpdatePetRequest},
    },
    server::{
        controller::util::{identity::require_role, json::ApiJson},
        error::Error,
        identity::Role,
        model::app::AppState,
        service::pet::PetService,
    },
};

pub static PET_TAG: &str = "pet";

/// Register a pet in the logged in user's shelter
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = RegisterPetRequest,
    responses(
        (status = 201, description = "Pet registered", body = PetDto),
        (status = 400, description = "Invalid request or birthdate", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a shelter owner or not the owner of the shelter", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_pet(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<RegisterPetRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let pet = PetService::new(&state.db)
        .register_pet(identity.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

/// List all pets with their shelters
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "All pets", body = Vec<PetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_pets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pets = PetService::new(&state.db).get_all_pets().await?;

    Ok((StatusCode::OK, Json(pets)))
}

/// Get a pet with its shelter
#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet with its shelter", body = PetDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pet = PetService::new(&state.db).get_pet(pet_id).await?;

    Ok((StatusCode::OK, Json(pet)))
}

/// Update fields of a pet in the logged in user's shelter, omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = UpdatePetRequest,
    responses(
        (status = 200, description = "Pet updated", body = PetDto),
        (status = 400, description = "Invalid request or birthdate", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of the pet's shelter", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    session: Session,
    Path(pet_id): Path<i32>,
    ApiJson(request): ApiJson<UpdatePetRequest>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    let pet = PetService::new(&state.db)
        .update_pet(identity.user_id, pet_id, request)
        .await?;

    Ok((StatusCode::OK, Json(pet)))
}

/// Remove a pet from the logged in user's shelter
#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 204, description = "Pet removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of the pet's shelter", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_pet(
    State(state): State<AppState>,
    session: Session,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_role(&state, &session, Role::ShelterOwner).await?;

    PetService::new(&state.db)
        .remove_pet(identity.user_id, pet_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
