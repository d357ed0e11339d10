use crate::model::user::UserDto;

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            created_at: model.created_at,
        }
    }
}
