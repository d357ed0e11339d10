use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Gender, Species};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birthdate: Date,
    pub gender: Gender,
    pub species: Species,
    pub breed: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: Option<String>,
    pub is_neutered: bool,
    pub has_pedigree: bool,
    pub shelter_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::adoption_application::Entity")]
    AdoptionApplication,
    #[sea_orm(
        belongs_to = "super::shelter::Entity",
        from = "Column::ShelterId",
        to = "super::shelter::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Shelter,
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

impl ActiveModelBehavior for ActiveModel {}
