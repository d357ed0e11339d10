use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pawfect::{
    model::pet::{Gender, RegisterPetRequest, Species, UpdatePetRequest},
    server::controller::pet::{get_all_pets, get_pet, register_pet, remove_pet, update_pet},
};
use pawfect::server::controller::util::json::ApiJson;
use pawfect_test_utils::prelude::*;

use crate::util::{app_state, login_as};

fn register_request(shelter_id: i32) -> RegisterPetRequest {
    RegisterPetRequest {
        name: "Rex".to_string(),
        birthdate: "2020-05-01".to_string(),
        gender: Gender::Male,
        species: Species::Dog,
        breed: None,
        description: None,
        image_url: None,
        is_neutered: false,
        has_pedigree: false,
        shelter_id,
    }
}

fn update_request() -> UpdatePetRequest {
    UpdatePetRequest {
        name: Some("Max".to_string()),
        birthdate: None,
        gender: None,
        species: None,
        breed: None,
        description: None,
        image_url: None,
        is_neutered: Some(true),
        has_pedigree: None,
    }
}

#[tokio::test]
/// Expect 201 created when a shelter owner registers a pet in their shelter
async fn register_pet_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = register_pet(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request(shelter.id)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a birthdate in the future
async fn register_pet_returns_bad_request_for_future_birthdate() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let mut request = register_request(shelter.id);
    request.birthdate = "2999-01-01".to_string();

    let result = register_pet(State(app_state(&test)), test.session, ApiJson(request)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when registering a pet in another owner's shelter
async fn register_pet_returns_forbidden_for_other_shelter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let (other_owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, other_owner.id).await;

    let result = register_pet(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request(shelter.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when registering a pet without being logged in
async fn register_pet_returns_unauthorized_without_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;

    let result = register_pet(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request(shelter.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 success listing and fetching pets without being logged in
async fn pets_are_public() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;

    let result = get_all_pets(State(app_state(&test))).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_pet(State(app_state(&test)), Path(pet_model.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a pet that doesn't exist
async fn get_pet_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = get_pet(State(app_state(&test)), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 success when the shelter owner updates their pet
async fn update_pet_returns_success_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    login_as(&test, owner.id).await;

    let result = update_pet(
        State(app_state(&test)),
        test.session,
        Path(pet_model.id),
        ApiJson(update_request()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when another shelter owner updates the pet
async fn update_pet_returns_forbidden_for_other_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let (other_owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, other_owner.id).await;

    let result = update_pet(
        State(app_state(&test)),
        test.session,
        Path(pet_model.id),
        ApiJson(update_request()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content when removing a pet and 404 not found removing it again
async fn remove_pet_returns_no_content_then_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    login_as(&test, owner.id).await;

    let result = remove_pet(
        State(app_state(&test)),
        test.session.clone(),
        Path(pet_model.id),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = remove_pet(State(app_state(&test)), test.session, Path(pet_model.id)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
