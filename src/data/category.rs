use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::model::category::Category;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find().all(self.db).await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Checks whether a category with the given slug exists.
    pub async fn exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
