use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pawfect::{
    model::adoption::{AdoptionStatus, RegisterAdoptionRequest, UpdateAdoptionStatusRequest},
    server::controller::adoption::{
        get_adoption, get_shelter_adoptions, get_user_adoptions, register_adoption,
        remove_adoption, update_adoption_status,
    },
};
use pawfect::server::controller::util::json::ApiJson;
use pawfect_test_utils::prelude::*;

use crate::util::{app_state, login_as};

#[tokio::test]
/// Expect 201 created when a logged in user applies for a pet
async fn register_adoption_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    login_as(&test, applicant.id).await;

    let result = register_adoption(
        State(app_state(&test)),
        test.session,
        ApiJson(RegisterAdoptionRequest {
            pet_id: pet_model.id,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when applying for a pet that doesn't exist
async fn register_adoption_returns_not_found_for_missing_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let applicant = test.user().insert_user().await?;
    login_as(&test, applicant.id).await;

    let result = register_adoption(
        State(app_state(&test)),
        test.session,
        ApiJson(RegisterAdoptionRequest { pet_id: 1 }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 success listing the logged in user's applications
async fn get_user_adoptions_returns_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    test.adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;
    login_as(&test, applicant.id).await;

    let result = get_user_adoptions(State(app_state(&test)), test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success for the shelter owner and 403 forbidden for a regular user
async fn get_shelter_adoptions_requires_shelter_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    test.adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;

    login_as(&test, owner.id).await;
    let result = get_shelter_adoptions(State(app_state(&test)), test.session.clone()).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    login_as(&test, applicant.id).await;
    let result = get_shelter_adoptions(State(app_state(&test)), test.session).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the applicant and shelter owner to see an application and anyone else to be forbidden
async fn get_adoption_is_visible_to_applicant_and_owner_only() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let stranger = test.user().insert_user().await?;
    let application = test
        .adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;

    for (user_id, expected) in [
        (applicant.id, StatusCode::OK),
        (owner.id, StatusCode::OK),
        (stranger.id, StatusCode::FORBIDDEN),
    ] {
        login_as(&test, user_id).await;

        let result = get_adoption(
            State(app_state(&test)),
            test.session.clone(),
            Path(application.id),
        )
        .await;

        let status = match result {
            Ok(resp) => resp.into_response().status(),
            Err(e) => e.into_response().status(),
        };
        assert_eq!(status, expected);
    }

    Ok(())
}

#[tokio::test]
/// Expect 200 success when the shelter owner approves an application
async fn update_adoption_status_returns_success_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let application = test
        .adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;
    login_as(&test, owner.id).await;

    let result = update_adoption_status(
        State(app_state(&test)),
        test.session,
        Path(application.id),
        ApiJson(UpdateAdoptionStatusRequest {
            status: AdoptionStatus::Approved,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when the applicant tries to approve their own application
async fn update_adoption_status_returns_forbidden_for_applicant() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let application = test
        .adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;
    login_as(&test, applicant.id).await;

    let result = update_adoption_status(
        State(app_state(&test)),
        test.session,
        Path(application.id),
        ApiJson(UpdateAdoptionStatusRequest {
            status: AdoptionStatus::Approved,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content when the applicant withdraws their application
async fn remove_adoption_returns_no_content_for_applicant() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (_, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let application = test
        .adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;
    login_as(&test, applicant.id).await;

    let result = remove_adoption(
        State(app_state(&test)),
        test.session,
        Path(application.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when the shelter owner withdraws an applicant's application
async fn remove_adoption_returns_forbidden_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet_model = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let application = test
        .adoption()
        .insert_adoption(applicant.id, pet_model.id)
        .await?;
    login_as(&test, owner.id).await;

    let result = remove_adoption(
        State(app_state(&test)),
        test.session,
        Path(application.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
