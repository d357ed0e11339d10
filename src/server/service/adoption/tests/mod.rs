
use pawfect_test_utils::prelude::*;

use crate::{
    model::adoption::{AdoptionStatus, RegisterAdoptionRequest, UpdateAdoptionStatusRequest},
    server::{
        error::{adoption::AdoptionError, pet::PetError, user::UserError, Error},
        service::adoption::AdoptionService,
    },
};

/// Shelter owner, applicant, and a pending application by the applicant for one of the
/// shelter's pets
struct Scenario {
    owner: entity::user::Model,
    applicant: entity::user::Model,
    pet: entity::pet::Model,
    application: entity::adoption_application::Model,
}

async fn scenario(test: &mut TestContext) -> Result<Scenario, TestError> {
    let (owner, shelter) = test.shelter().insert_shelter_owner().await?;
    let pet = test.pet().insert_pet(shelter.id).await?;
    let applicant = test.user().insert_user().await?;
    let application = test.adoption().insert_adoption(applicant.id, pet.id).await?;

    Ok(Scenario {
        owner,
        applicant,
        pet,
        application,
    })
}
