use pawfect::server::model::{app::AppState, session::user::SessionUserId};
use pawfect_test_utils::prelude::*;

/// Application state backed by the test database
pub fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}

/// Log `user_id` into the test session
pub async fn login_as(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .expect("Failed to insert user ID into session");
}
