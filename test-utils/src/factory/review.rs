//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The category slug and owner username are required because reviews carry
/// foreign keys to both; create those rows first (see `factory::category` and
/// `factory::user`).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, &category.slug, &user.username)
///     .title("Jenga")
///     .votes(5)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_body: String,
    review_img_url: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Review {id}"` where id is auto-incremented
    /// - designer: `"Designer {id}"`
    /// - review_body: a short fixed body
    /// - review_img_url: a placeholder image URL
    /// - created_at: now
    /// - votes: 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category` - Slug of an existing category
    /// - `owner` - Username of an existing user
    ///
    /// # Returns
    /// - `ReviewFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        category: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Review {}", id),
            category: category.into(),
            designer: format!("Designer {}", id),
            owner: owner.into(),
            review_body: "We couldn't find the werewolf!".to_string(),
            review_img_url: "https://images.example.com/board.jpeg".to_string(),
            created_at: Utc::now(),
            votes: 0,
        }
    }

    /// Sets the title for the review.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the designer for the review.
    pub fn designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    /// Sets the body text for the review.
    pub fn review_body(mut self, review_body: impl Into<String>) -> Self {
        self.review_body = review_body.into();
        self
    }

    /// Sets the image URL for the review.
    pub fn review_img_url(mut self, review_img_url: impl Into<String>) -> Self {
        self.review_img_url = review_img_url.into();
        self
    }

    /// Sets the creation timestamp for the review.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the vote count for the review.
    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            designer: ActiveValue::Set(self.designer),
            owner: ActiveValue::Set(self.owner),
            review_body: ActiveValue::Set(self.review_body),
            review_img_url: ActiveValue::Set(self.review_img_url),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for an existing category and owner.
///
/// Shorthand for `ReviewFactory::new(db, category, owner).build().await`.
pub async fn create_review(
    db: &DatabaseConnection,
    category: impl Into<String>,
    owner: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, category, owner).build().await
}
