use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pawfect::{
    model::shelter::{RegisterShelterRequest, UpdateShelterRequest},
    server::controller::shelter::{
        get_all_shelters, get_shelter, register_shelter, remove_shelter, update_shelter,
    },
};
use pawfect::server::controller::util::json::ApiJson;
use pawfect_test_utils::prelude::*;

use crate::util::{app_state, login_as};

fn register_request() -> RegisterShelterRequest {
    RegisterShelterRequest {
        name: "Happy Paws".to_string(),
        description: Some("Dogs and cats".to_string()),
        email: "info@happypaws.org".to_string(),
    }
}

fn update_request() -> UpdateShelterRequest {
    UpdateShelterRequest {
        name: Some("Happier Paws".to_string()),
        description: None,
        email: None,
    }
}

#[tokio::test]
/// Expect 201 created when a logged in user registers a shelter
async fn register_shelter_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = register_shelter(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the user already has a shelter
async fn register_shelter_returns_conflict_for_second_shelter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = register_shelter(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an invalid shelter email
async fn register_shelter_returns_bad_request_for_invalid_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let mut request = register_request();
    request.email = "not-an-email".to_string();

    let result = register_shelter(State(app_state(&test)), test.session, ApiJson(request)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when registering a shelter without being logged in
async fn register_shelter_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = register_shelter(
        State(app_state(&test)),
        test.session,
        ApiJson(register_request()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 success listing shelters without being logged in
async fn get_all_shelters_is_public() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    test.shelter().insert_shelter_owner().await?;

    let result = get_all_shelters(State(app_state(&test))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success for an existing shelter and 404 not found for a missing one
async fn get_shelter_returns_shelter_or_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;

    let result = get_shelter(State(app_state(&test)), Path(shelter.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_shelter(State(app_state(&test)), Path(shelter.id + 1)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 success when the owner updates their shelter
async fn update_shelter_returns_success_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = update_shelter(
        State(app_state(&test)),
        test.session,
        Path(shelter.id),
        ApiJson(update_request()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when a user without the ShelterOwner role updates a shelter
async fn update_shelter_returns_forbidden_without_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let user_model = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = update_shelter(
        State(app_state(&test)),
        test.session,
        Path(shelter.id),
        ApiJson(update_request()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when a shelter owner updates another owner's shelter
async fn update_shelter_returns_forbidden_for_other_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let (other_owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, other_owner.id).await;

    let result = update_shelter(
        State(app_state(&test)),
        test.session,
        Path(shelter.id),
        ApiJson(update_request()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content when the owner removes their shelter
async fn remove_shelter_returns_no_content() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = remove_shelter(State(app_state(&test)), test.session, Path(shelter.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
