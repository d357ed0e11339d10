use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pawfect::{
    model::{auth::LoginRequest, user::RegisterUserRequest},
    server::{
        controller::auth::{get_current_user, login, logout, register},
        model::session::user::SessionUserId,
    },
};
use pawfect::server::controller::util::json::ApiJson;
use pawfect_test_utils::prelude::*;

use crate::util::{app_state, login_as};

fn register_request(email: &str, password: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 201 created when registering a new account
async fn register_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = register(
        State(app_state(&test)),
        ApiJson(register_request("jane@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the password does not meet the policy
async fn register_returns_bad_request_for_weak_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = register(
        State(app_state(&test)),
        ApiJson(register_request("jane@example.com", "password")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the email is already registered
async fn register_returns_bad_request_for_taken_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    test.user()
        .insert_user_with_password("jane@example.com", TEST_PASSWORD)
        .await?;

    let result = register(
        State(app_state(&test)),
        ApiJson(register_request("jane@example.com", TEST_PASSWORD)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 success and the user ID stored in session after logging in
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test
        .user()
        .insert_user_with_password("jane@example.com", TEST_PASSWORD)
        .await?;

    let result = login(
        State(app_state(&test)),
        test.session.clone(),
        ApiJson(LoginRequest {
            email: "jane@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user_model.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized and an empty session for a wrong password
async fn login_returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    test.user()
        .insert_user_with_password("jane@example.com", TEST_PASSWORD)
        .await?;

    let result = login(
        State(app_state(&test)),
        test.session.clone(),
        ApiJson(LoginRequest {
            email: "jane@example.com".to_string(),
            password: "Wr0ng!pass".to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 no content and the user cleared from session after logging out
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 no content when logging out without being logged in
async fn logout_without_session_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = logout(test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the user's identity when logged in
async fn get_current_user_returns_identity() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = get_current_user(State(app_state(&test)), test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when no user is logged in
async fn get_current_user_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = get_current_user(State(app_state(&test)), test.session).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized and a cleared session when the session user was deleted
async fn get_current_user_clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;
    let nonexistent_user_id = 1;
    login_as(&test, nonexistent_user_id).await;

    let result = get_current_user(State(app_state(&test)), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}
