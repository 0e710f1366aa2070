use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A review classification slug with its description.
#[derive(Debug, Clone)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }

    /// Converts the domain model into its wire DTO.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            slug: self.slug,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub slug: String,
    pub description: String,
}

/// Response body for `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub categories: Vec<CategoryDto>,
}
