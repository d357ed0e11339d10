pub use super::adoption_application::Entity as AdoptionApplication;
pub use super::pet::Entity as Pet;
pub use super::shelter::Entity as Shelter;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
