use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pawfect::server::{
    controller::user::{get_user, remove_user},
    model::session::user::SessionUserId,
};
use pawfect_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::{app_state, login_as};

#[tokio::test]
/// Expect 200 success when fetching the logged in user's own account
async fn get_user_returns_own_account() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = get_user(State(app_state(&test)), test.session, Path(user_model.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when fetching another user's account
async fn get_user_returns_forbidden_for_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    let other_user = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = get_user(State(app_state(&test)), test.session, Path(other_user.id)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when fetching an account without being logged in
async fn get_user_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pet_tables().build().await?;

    let result = get_user(State(app_state(&test)), test.session, Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content and an ended session after deleting the own account
async fn remove_user_deletes_account_and_ends_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let (owner, _) = test.shelter().insert_shelter_owner().await?;
    login_as(&test, owner.id).await;

    let result = remove_user(
        State(app_state(&test)),
        test.session.clone(),
        Path(owner.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    let remaining = entity::prelude::User::find_by_id(owner.id)
        .one(&test.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when deleting another user's account
async fn remove_user_returns_forbidden_for_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;
    let other_user = test.user().insert_user().await?;
    login_as(&test, user_model.id).await;

    let result = remove_user(State(app_state(&test)), test.session, Path(other_user.id)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
