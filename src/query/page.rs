//! Pagination engine.
//!
//! A page window is parsed once from the raw `limit`/`p` query values and then
//! applied either in memory (the reviews list, already filtered and sorted) or
//! as an offset into the storage query (a review's comments). Both paths share
//! the same contract: pages are 1-indexed chunks of `limit` records, and
//! `total_count` always reports the size of the full filtered sequence.

use serde::Deserialize;

use crate::error::AppError;

/// Page size applied when the request carries no `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `limit`/`p` query parameters for endpoints that only paginate.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl PageQuery {
    /// Parses the raw pair into a validated page window.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        PageWindow::from_raw(self.limit.as_deref(), self.p.as_deref())
    }
}

/// A validated limit and optional 1-indexed page.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub limit: u64,
    pub page: Option<u64>,
}

impl PageWindow {
    /// Parses the raw `limit`/`p` strings.
    ///
    /// `limit` is checked before `p`; either value failing to parse as an
    /// unsigned integer is a format error naming the parameter. Absent values
    /// fall back to the default limit and to "no page requested".
    ///
    /// # Returns
    /// - `Ok(PageWindow)` - Both values parse (or are absent)
    /// - `Err(AppError::BadRequest)` - A value is not in correct format
    pub fn from_raw(limit: Option<&str>, p: Option<&str>) -> Result<Self, AppError> {
        let limit = match limit {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| AppError::BadRequest("limit is not in correct format".to_string()))?,
            None => DEFAULT_LIMIT,
        };

        let page = match p {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| AppError::BadRequest("p is not in correct format".to_string()))?,
            ),
            None => None,
        };

        Ok(Self { limit, page })
    }

    /// Zero-based index of the requested chunk, for offset-based queries.
    ///
    /// An absent page means the first chunk. The range of an explicit page must
    /// be validated against the total via `verify` before the index is trusted.
    pub fn page_index(&self) -> u64 {
        self.page.map(|p| p.saturating_sub(1)).unwrap_or(0)
    }

    /// Checks an explicitly requested page against the full sequence size.
    ///
    /// An absent page is always in range. Page 1 of an empty sequence is a
    /// valid empty result; page 0 and any page whose chunk starts at or beyond
    /// the end are "missing page requested".
    pub fn verify(&self, total: u64) -> Result<(), AppError> {
        let Some(p) = self.page else {
            return Ok(());
        };

        if p == 0 {
            return Err(missing_page());
        }
        if total == 0 && p == 1 {
            return Ok(());
        }
        if (p - 1).saturating_mul(self.limit) >= total {
            return Err(missing_page());
        }

        Ok(())
    }
}

fn missing_page() -> AppError {
    AppError::BadRequest("missing page requested".to_string())
}

/// A single page of records plus the size of the full sequence it came from.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// Slices an already-filtered, already-sorted sequence into the requested page.
///
/// With no page requested, the first `limit` records are returned (all of them
/// when `limit` is at least the sequence length). With a page requested, the
/// sequence is partitioned into consecutive `limit`-sized chunks and the
/// 1-indexed chunk is returned after a range check.
///
/// # Returns
/// - `Ok(Page)` - The requested records and the full sequence size
/// - `Err(AppError::BadRequest)` - The requested page is out of range
pub fn paginate<T>(items: Vec<T>, window: &PageWindow) -> Result<Page<T>, AppError> {
    let total_count = items.len() as u64;
    window.verify(total_count)?;

    let start = window.page_index().saturating_mul(window.limit);
    let items = items
        .into_iter()
        .skip(start as usize)
        .take(window.limit as usize)
        .collect();

    Ok(Page { items, total_count })
}
