//! Review domain models and parameters.
//!
//! Reviews are the primary listable entity. The list endpoint works with
//! `ReviewSummary` (the projection the list query selects, without the body
//! text); the detail, create, and vote endpoints work with the full `Review`.
//! Both carry a `comment_count` recomputed from live comment rows, never
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// List projection of a review, enriched with its live comment count.
#[derive(Debug, Clone)]
pub struct ReviewSummary {
    pub owner: String,
    pub title: String,
    pub review_id: i32,
    pub category: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub designer: String,
    pub comment_count: i64,
}

impl ReviewSummary {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The review entity from the database
    /// - `comment_count` - Number of live comments attached to the review
    pub fn from_entity(entity: entity::review::Model, comment_count: i64) -> Self {
        Self {
            owner: entity.owner,
            title: entity.title,
            review_id: entity.review_id,
            category: entity.category,
            review_img_url: entity.review_img_url,
            created_at: entity.created_at,
            votes: entity.votes,
            designer: entity.designer,
            comment_count,
        }
    }

    /// Converts the domain model into its wire DTO.
    pub fn into_dto(self) -> ReviewSummaryDto {
        ReviewSummaryDto {
            owner: self.owner,
            title: self.title,
            review_id: self.review_id,
            category: self.category,
            review_img_url: self.review_img_url,
            created_at: self.created_at,
            votes: self.votes,
            designer: self.designer,
            comment_count: self.comment_count,
        }
    }
}

/// A full review as returned by the detail, create, and vote endpoints.
#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

impl Review {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model, comment_count: i64) -> Self {
        Self {
            review_id: entity.review_id,
            title: entity.title,
            category: entity.category,
            designer: entity.designer,
            owner: entity.owner,
            review_body: entity.review_body,
            review_img_url: entity.review_img_url,
            created_at: entity.created_at,
            votes: entity.votes,
            comment_count,
        }
    }

    /// Converts the domain model into its wire DTO.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            title: self.title,
            category: self.category,
            designer: self.designer,
            owner: self.owner,
            review_body: self.review_body,
            review_img_url: self.review_img_url,
            created_at: self.created_at,
            votes: self.votes,
            comment_count: self.comment_count,
        }
    }
}

/// Parameters for creating a review.
///
/// Built by the controller after the request body passes the shape check.
/// The identifier, timestamp, image URL, and vote count are server-assigned.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub owner: String,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewSummaryDto {
    pub owner: String,
    pub title: String,
    pub review_id: i32,
    pub category: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub designer: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// Response body for `GET /api/reviews`.
///
/// `total_count` is the size of the full filtered sequence, not the page size.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewsResponseDto {
    pub reviews: Vec<ReviewSummaryDto>,
    pub total_count: u64,
}

/// Response body for the single-review endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub review: ReviewDto,
}
