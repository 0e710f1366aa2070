//! Review data repository for database operations.
//!
//! This module provides the `ReviewRepository` for managing review records.
//! Comment counts are recomputed from live comment rows on every read, and
//! vote changes are expressed as relative updates applied by the storage
//! engine so concurrent increments never race through a read-modify-write.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::review::{CreateReviewParams, Review, ReviewSummary};

/// Image applied to reviews created without one; the creation shape carries no
/// image field.
const DEFAULT_REVIEW_IMG_URL: &str =
    "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg";

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reviews, optionally filtered by category slug, with live
    /// comment counts.
    ///
    /// Rows come back in identifier order; sorting by the requested column is
    /// applied by the caller over the enriched summaries, since the comment
    /// count only exists after this join.
    ///
    /// # Arguments
    /// - `category` - Optional category slug to filter by
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewSummary>)` - Filtered summaries with comment counts
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<ReviewSummary>, DbErr> {
        let mut query =
            entity::prelude::Review::find().order_by_asc(entity::review::Column::ReviewId);

        if let Some(slug) = category {
            query = query.filter(entity::review::Column::Category.eq(slug));
        }

        let reviews = query.all(self.db).await?;

        // One grouped count query for the whole page of ids
        let ids: Vec<i32> = reviews.iter().map(|r| r.review_id).collect();
        let counts: HashMap<i32, i64> = if ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Comment::find()
                .select_only()
                .column(entity::comment::Column::ReviewId)
                .column_as(entity::comment::Column::CommentId.count(), "comment_count")
                .filter(entity::comment::Column::ReviewId.is_in(ids))
                .group_by(entity::comment::Column::ReviewId)
                .into_tuple::<(i32, i64)>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        Ok(reviews
            .into_iter()
            .map(|review| {
                let count = counts.get(&review.review_id).copied().unwrap_or(0);
                ReviewSummary::from_entity(review, count)
            })
            .collect())
    }

    /// Gets a review by id with its live comment count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let comment_count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(Review::from_entity(review, comment_count as i64)))
    }

    /// Checks whether a review with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ReviewId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new review with server-assigned id, timestamp, image, and
    /// zero votes.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review, comment count necessarily zero
    /// - `Err(DbErr)` - Database error during insert, including foreign-key
    ///   violations on the owner relationship
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            title: ActiveValue::Set(params.title),
            category: ActiveValue::Set(params.category),
            designer: ActiveValue::Set(params.designer),
            owner: ActiveValue::Set(params.owner),
            review_body: ActiveValue::Set(params.review_body),
            review_img_url: ActiveValue::Set(DEFAULT_REVIEW_IMG_URL.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            votes: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review, 0))
    }

    /// Applies a relative vote change atomically in the storage engine.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No review with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_votes(&self, id: i32, delta: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::update_many()
            .col_expr(
                entity::review::Column::Votes,
                Expr::col(entity::review::Column::Votes).add(delta),
            )
            .filter(entity::review::Column::ReviewId.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
