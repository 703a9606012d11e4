use crate::domain::User;
use crate::registry::Entity;

impl Entity for User {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}
