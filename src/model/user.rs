use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    /// Checked against the password policy by the identity provider
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
}
