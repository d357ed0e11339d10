use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdoptionStatus {
    #[default]
    Pending,
    Declined,
    Approved,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterAdoptionRequest {
    pub pet_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAdoptionStatusRequest {
    pub status: AdoptionStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdoptionDto {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub status: AdoptionStatus,
    pub user_id: i32,
    pub pet_id: i32,
    pub pet_name: Option<String>,
}
