use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the ID of the logged in user.
pub const SESSION_USER_ID_KEY: &str = "pawfect:user:id";

/// Accessor for the logged in user's ID.
///
/// The ID is written on login and read by every authenticated handler. A value that fails
/// to deserialize surfaces as a session error rather than being treated as logged out.
pub struct SessionUserId;

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_USER_ID_KEY).await?)
    }
}
