use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, review::ReviewRepository},
    error::{storage, AppError},
    model::review::{CreateReviewParams, Review, ReviewSummary},
    query::{
        page::{self, Page},
        ReviewListQuery,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the filtered, sorted, paginated reviews list.
    ///
    /// Checks run in the fixed order category, sort_by, order, limit, page, so
    /// a request with several invalid parameters always fails the same way.
    /// The full filtered set is fetched with live comment counts, sorted in
    /// memory by the whitelisted column, and sliced by the pagination engine.
    ///
    /// # Returns
    /// - `Ok(Page<ReviewSummary>)` - Requested page plus the full filtered count
    /// - `Err(AppError::NotFound)` - Unknown category
    /// - `Err(AppError::BadRequest)` - Invalid sort, order, limit, or page
    pub async fn list(&self, query: &ReviewListQuery) -> Result<Page<ReviewSummary>, AppError> {
        if let Some(slug) = &query.category {
            if !CategoryRepository::new(self.db).exists(slug).await? {
                return Err(AppError::NotFound("category not found".to_string()));
            }
        }

        let sorting = query.sorting()?;
        let window = query.window()?;

        let mut reviews = ReviewRepository::new(self.db)
            .list(query.category.as_deref())
            .await?;
        sorting.apply(&mut reviews);

        page::paginate(reviews, &window)
    }

    /// Gets a single review by id with its live comment count.
    ///
    /// # Returns
    /// - `Ok(Review)` - The review
    /// - `Err(AppError::NotFound)` - No review with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("review not found".to_string()))
    }

    /// Creates a new review.
    ///
    /// The category is looked up before the insert; the owner relationship is
    /// left to the storage engine's foreign key and reported under its
    /// external name.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::NotFound)` - Unknown category or owner
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        if !CategoryRepository::new(self.db).exists(&params.category).await? {
            return Err(AppError::NotFound("category not found".to_string()));
        }

        ReviewRepository::new(self.db)
            .create(params)
            .await
            .map_err(|err| storage::map_fk_violation(err, "username"))
    }

    /// Applies a relative vote change and returns the updated review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The review after the increment
    /// - `Err(AppError::NotFound)` - No review with that id
    pub async fn increment_votes(&self, id: i32, delta: i32) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        if !repo.increment_votes(id, delta).await? {
            return Err(AppError::NotFound("review not found".to_string()));
        }

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("review not found".to_string()))
    }
}
