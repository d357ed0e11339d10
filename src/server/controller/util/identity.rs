use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    identity::{Identity, Role},
    model::{app::AppState, session::user::SessionUserId},
    service::auth::AuthService,
};

/// Resolves the identity of the user logged into the session
///
/// # Returns
/// - `Ok(Identity)`: User found, with the roles they hold
/// - `Err(Error::AuthError(UserNotInSession))`: No user ID present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID in session no longer exists (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_identity(state: &AppState, session: &Session) -> Result<Identity, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    match AuthService::new(state.identity.as_ref())
        .resolve_identity(user_id)
        .await
    {
        Ok(identity) => Ok(identity),
        Err(e @ Error::AuthError(AuthError::UserNotInDatabase(_))) => {
            session.clear().await;

            tracing::debug!(
                user_id = %user_id,
                "Session cleared for user with active session but not found in database"
            );

            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Resolves the session identity and requires it to hold `role`
///
/// # Returns
/// - `Ok(Identity)`: Logged in user holding the role
/// - `Err(Error::AuthError(MissingRole))`: Logged in user lacks the role
pub async fn require_role(
    state: &AppState,
    session: &Session,
    role: Role,
) -> Result<Identity, Error> {
    let identity = get_identity(state, session).await?;
    identity.require_role(role)?;

    Ok(identity)
}
