//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reply attached to exactly one review.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub review_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            body: entity.body,
            review_id: entity.review_id,
            author: entity.author,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model into its wire DTO.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            body: self.body,
            review_id: self.review_id,
            author: self.author,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a comment.
///
/// Built by the controller after the request body passes the shape check. The
/// identifier, timestamp, and vote count are server-assigned; any extra
/// submitted fields have already been discarded.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub review_id: i32,
    pub author: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub body: String,
    pub review_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Response body for `GET /api/reviews/{review_id}/comments`.
///
/// `total_count` is the review's full comment count, independent of the page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponseDto {
    pub comments: Vec<CommentDto>,
    pub total_count: u64,
}

/// Response body for the single-comment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub comment: CommentDto,
}
