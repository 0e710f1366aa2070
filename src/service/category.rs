use sea_orm::DatabaseConnection;

use crate::{data::category::CategoryRepository, error::AppError, model::category::Category};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }
}
