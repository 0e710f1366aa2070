use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered reviewer account. Read-only through this API.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            avatar_url: entity.avatar_url,
        }
    }

    /// Converts the domain model into its wire DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Response body for `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponseDto {
    pub users: Vec<UserDto>,
}

/// Response body for `GET /api/users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}
