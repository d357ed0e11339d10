//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` and browsable through
//! Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` invocation so axum merges
/// their method routers.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`,
///   `GET /api/auth/user`
/// - `GET|POST /api/shelters`, `GET|PUT|DELETE /api/shelters/{id}`
/// - `GET|POST /api/pets`, `GET|PUT|DELETE /api/pets/{id}`
/// - `GET|POST /api/adoptions`, `GET /api/adoptions/shelter`,
///   `GET|DELETE /api/adoptions/{id}`, `PUT /api/adoptions/{id}/status`
/// - `GET|DELETE /api/users/{id}`
///
/// # Returns
/// A `Router<AppState>` which still needs its state and a session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pawfect", description = "Pawfect pet adoption API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session routes"),
        (name = controller::shelter::SHELTER_TAG, description = "Shelter management routes"),
        (name = controller::pet::PET_TAG, description = "Pet management routes"),
        (name = controller::adoption::ADOPTION_TAG, description = "Adoption application routes"),
        (name = controller::user::USER_TAG, description = "User account routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_current_user))
        .routes(routes!(
            controller::shelter::register_shelter,
            controller::shelter::get_all_shelters
        ))
        .routes(routes!(
            controller::shelter::get_shelter,
            controller::shelter::update_shelter,
            controller::shelter::remove_shelter
        ))
        .routes(routes!(
            controller::pet::register_pet,
            controller::pet::get_all_pets
        ))
        .routes(routes!(
            controller::pet::get_pet,
            controller::pet::update_pet,
            controller::pet::remove_pet
        ))
        .routes(routes!(
            controller::adoption::register_adoption,
            controller::adoption::get_user_adoptions
        ))
        .routes(routes!(controller::adoption::get_shelter_adoptions))
        .routes(routes!(
            controller::adoption::get_adoption,
            controller::adoption::remove_adoption
        ))
        .routes(routes!(controller::adoption::update_adoption_status))
        .routes(routes!(
            controller::user::get_user,
            controller::user::remove_user
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
