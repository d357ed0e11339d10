use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::adoption_application::Entity")]
    AdoptionApplication,
    #[sea_orm(has_one = "super::shelter::Entity")]
    Shelter,
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
}

impl Related<super::adoption_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdoptionApplication.def()
    }
}

impl Related<super::shelter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shelter.def()
    }
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
