use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::model::shelter::RegisterShelterRequest;

use super::*;

fn request() -> RegisterShelterRequest {
    RegisterShelterRequest {
        name: "Happy Paws".to_string(),
        description: None,
        email: "info@happypaws.org".to_string(),
    }
}

/// Expect the shelter to be created and the ShelterOwner role granted
#[tokio::test]
async fn registers_shelter_and_grants_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;

    let identity = DatabaseIdentityProvider::new(test.db.clone());
    let shelter_service = ShelterService::new(&test.db, &identity);
    let result = shelter_service
        .register_shelter(user_model.id, request())
        .await;

    let shelter = result.unwrap();
    assert_eq!(shelter.user_id, user_model.id);
    assert_eq!(shelter.description, "No description");

    let resolved = identity.resolve(user_model.id).await.unwrap().unwrap();
    assert!(resolved.has_role(Role::ShelterOwner));

    Ok(())
}

/// Expect a conflict on the second registration and exactly one shelter row for the user
#[tokio::test]
async fn rejects_second_shelter_for_same_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;

    let identity = DatabaseIdentityProvider::new(test.db.clone());
    let shelter_service = ShelterService::new(&test.db, &identity);
    shelter_service
        .register_shelter(user_model.id, request())
        .await
        .unwrap();
    let result = shelter_service
        .register_shelter(user_model.id, request())
        .await;

    assert!(matches!(
        result,
        Err(Error::ShelterError(ShelterError::AlreadyRegistered(_)))
    ));
    let shelter_count = entity::prelude::Shelter::find()
        .filter(entity::shelter::Column::UserId.eq(user_model.id))
        .count(&test.db)
        .await?;
    assert_eq!(shelter_count, 1);

    Ok(())
}

/// Expect validation errors for a too-short name and a malformed email
#[tokio::test]
async fn rejects_invalid_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;

    let identity = DatabaseIdentityProvider::new(test.db.clone());
    let shelter_service = ShelterService::new(&test.db, &identity);
    let result = shelter_service
        .register_shelter(
            user_model.id,
            RegisterShelterRequest {
                name: "  ab ".to_string(),
                description: None,
                email: "not-an-email".to_string(),
            },
        )
        .await;

    match result {
        Err(Error::ValidationError(err)) => {
            let properties: Vec<&str> = err.errors.iter().map(|e| e.property.as_str()).collect();
            assert_eq!(properties, vec!["email", "name"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Expect registration to succeed even when the role grant fails
#[tokio::test]
async fn succeeds_when_role_grant_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let user_model = test.user().insert_user().await?;

    let identity = FlakyIdentityProvider::new(&test, 0);
    let shelter_service = ShelterService::new(&test.db, &identity);
    let result = shelter_service
        .register_shelter(user_model.id, request())
        .await;

    assert!(result.is_ok());

    Ok(())
}
