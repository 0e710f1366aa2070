//! Comment data repository for database operations.
//!
//! A review's comments are paginated in the storage query itself (LIMIT and
//! OFFSET through SeaORM's paginator) rather than in memory, while reporting
//! the review's full comment count alongside each page.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a review's comments, newest first, plus the review's
    /// full comment count.
    ///
    /// # Arguments
    /// - `review_id` - Id of the review whose comments to fetch
    /// - `per_page` - Page size
    /// - `page` - Zero-indexed page number
    ///
    /// # Returns
    /// - `Ok((comments, total))` - The requested page and the full count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_review_paginated(
        &self,
        review_id: i32,
        per_page: u64,
        page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let paginator = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let comments = paginator.fetch_page(page).await?;

        Ok((comments.into_iter().map(Comment::from_entity).collect(), total))
    }

    /// Gets a comment by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(comment.map(Comment::from_entity))
    }

    /// Creates a new comment with server-assigned id, timestamp, and zero
    /// votes.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error during insert, including foreign-key
    ///   violations on the author relationship
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            body: ActiveValue::Set(params.body),
            review_id: ActiveValue::Set(params.review_id),
            author: ActiveValue::Set(params.author),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    /// Applies a relative vote change atomically in the storage engine.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No comment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_votes(&self, id: i32, delta: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                Expr::col(entity::comment::Column::Votes).add(delta),
            )
            .filter(entity::comment::Column::CommentId.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(true)` - The comment existed and was deleted
    /// - `Ok(false)` - No comment with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
