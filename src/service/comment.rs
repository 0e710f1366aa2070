use sea_orm::DatabaseConnection;

use crate::{
    data::{comment::CommentRepository, review::ReviewRepository},
    error::{storage, AppError},
    model::comment::{Comment, CreateCommentParams},
    query::page::{Page, PageQuery},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a review's comments, newest first.
    ///
    /// Checks run in the fixed order limit, page format, review existence,
    /// page range. The slice happens in the storage query; the returned
    /// `total_count` is the review's full comment count, and page 1 of a
    /// review without comments is a valid empty result.
    ///
    /// # Returns
    /// - `Ok(Page<Comment>)` - Requested page plus the full comment count
    /// - `Err(AppError::NotFound)` - Unknown review
    /// - `Err(AppError::BadRequest)` - Invalid limit or page, or page out of range
    pub async fn list_for_review(
        &self,
        review_id: i32,
        query: &PageQuery,
    ) -> Result<Page<Comment>, AppError> {
        let window = query.window()?;

        if !ReviewRepository::new(self.db).exists(review_id).await? {
            return Err(AppError::NotFound("review not found".to_string()));
        }

        let (comments, total) = CommentRepository::new(self.db)
            .get_by_review_paginated(review_id, window.limit, window.page_index())
            .await?;

        window.verify(total)?;

        Ok(Page {
            items: comments,
            total_count: total,
        })
    }

    /// Creates a new comment on a review.
    ///
    /// The review is looked up before the insert; the author relationship is
    /// left to the storage engine's foreign key and reported under its
    /// external name.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - Unknown review or username
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if !ReviewRepository::new(self.db).exists(params.review_id).await? {
            return Err(AppError::NotFound("review not found".to_string()));
        }

        CommentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|err| storage::map_fk_violation(err, "username"))
    }

    /// Applies a relative vote change and returns the updated comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment after the increment
    /// - `Err(AppError::NotFound)` - No comment with that id
    pub async fn increment_votes(&self, id: i32, delta: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        if !repo.increment_votes(id, delta).await? {
            return Err(AppError::NotFound("comment not found".to_string()));
        }

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("comment not found".to_string()))
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(())` - The comment was deleted
    /// - `Err(AppError::NotFound)` - No comment with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("comment not found".to_string()));
        }

        Ok(())
    }
}
