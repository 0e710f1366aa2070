use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::user::User;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users in insertion order.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find().all(self.db).await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(username.to_string())
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }
}
