//! Query-parameter normalization for the reviews list endpoint.
//!
//! Raw query parameters arrive as optional strings and are checked against
//! whitelists before any storage work happens. The deterministic evaluation
//! order across the whole list pipeline is category, then sort_by, then order,
//! then limit, then page; anything outside the recognized parameter set is
//! silently ignored and defaults apply.

pub mod page;

use std::cmp::Ordering;

use serde::Deserialize;

use crate::{
    error::AppError,
    model::review::ReviewSummary,
    query::page::PageWindow,
};

/// Whitelisted review columns a list request may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Owner,
    Title,
    ReviewId,
    ReviewImgUrl,
    Votes,
    Designer,
    CommentCount,
    CreatedAt,
}

impl SortColumn {
    /// Parses a raw `sort_by` value against the whitelist.
    ///
    /// # Returns
    /// - `Some(SortColumn)` - The value names a sortable column
    /// - `None` - The value is not in the whitelist
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "title" => Some(Self::Title),
            "review_id" => Some(Self::ReviewId),
            "review_img_url" => Some(Self::ReviewImgUrl),
            "votes" => Some(Self::Votes),
            "designer" => Some(Self::Designer),
            "comment_count" => Some(Self::CommentCount),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn compare(&self, a: &ReviewSummary, b: &ReviewSummary) -> Ordering {
        match self {
            Self::Owner => a.owner.cmp(&b.owner),
            Self::Title => a.title.cmp(&b.title),
            Self::ReviewId => a.review_id.cmp(&b.review_id),
            Self::ReviewImgUrl => a.review_img_url.cmp(&b.review_img_url),
            Self::Votes => a.votes.cmp(&b.votes),
            Self::Designer => a.designer.cmp(&b.designer),
            Self::CommentCount => a.comment_count.cmp(&b.comment_count),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

/// Sort direction, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    /// Parses a raw `order` value.
    ///
    /// # Returns
    /// - `Some(Order)` - The value normalizes to ASC or DESC
    /// - `None` - Anything else
    pub fn from_param(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// A validated sort column and direction pair.
#[derive(Debug, Clone, Copy)]
pub struct Sorting {
    pub column: SortColumn,
    pub order: Order,
}

impl Sorting {
    /// Sorts review summaries in place by the requested column and direction.
    ///
    /// The sort is stable, so rows that compare equal keep their fetch order.
    pub fn apply(&self, reviews: &mut [ReviewSummary]) {
        reviews.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            match self.order {
                Order::Asc => ordering,
                Order::Desc => ordering.reverse(),
            }
        });
    }
}

/// Raw query parameters accepted by `GET /api/reviews`.
///
/// All values arrive as optional strings; unrecognized parameters never reach
/// this struct and therefore cannot influence the result.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListQuery {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl ReviewListQuery {
    /// Validates `sort_by` and `order` against their whitelists.
    ///
    /// Defaults to `created_at` descending when the parameters are absent.
    ///
    /// # Returns
    /// - `Ok(Sorting)` - Both values valid (or absent)
    /// - `Err(AppError::BadRequest)` - Naming the rejected value; `sort_by` is
    ///   checked before `order`
    pub fn sorting(&self) -> Result<Sorting, AppError> {
        let column = match &self.sort_by {
            Some(raw) => SortColumn::from_param(raw).ok_or_else(|| {
                AppError::BadRequest(format!("{raw} is not a valid sort column"))
            })?,
            None => SortColumn::CreatedAt,
        };

        let order = match &self.order {
            Some(raw) => Order::from_param(raw)
                .ok_or_else(|| AppError::BadRequest(format!("{raw} is not a valid order")))?,
            None => Order::Desc,
        };

        Ok(Sorting { column, order })
    }

    /// Parses the `limit`/`p` pair into a page window.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        PageWindow::from_raw(self.limit.as_deref(), self.p.as_deref())
    }
}
