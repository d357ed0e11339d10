use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// The currently authenticated user along with the roles granted to them
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct IdentityDto {
    pub user_id: i32,
    pub roles: Vec<String>,
}
