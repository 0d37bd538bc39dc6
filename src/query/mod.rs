//! Query engine - filter, sort and paginate a record sequence.
//!
//! Filtering narrows in a fixed order (search, then category, then status),
//! and without a sort the result keeps store insertion order. Sorting is
//! stable, so ties keep insertion order too.
//!
//! ## Example
//!
//! ```
//! use feedback_board::{apply, sample_records, ListQuery, Status};
//!
//! let page = apply(sample_records(), &ListQuery::default().status(Status::Pending));
//! let ids: Vec<&str> = page.feedback.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["1", "2", "7", "8"]);
//! assert_eq!(page.pagination.count, 4);
//! ```

mod params;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;

pub use params::{
    ListParams, ListQuery, Sort, SortDirection, SortKey, DEFAULT_LIMIT, DEFAULT_PAGE,
};

/// Where a returned slice sits in the full filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub current: usize,
    /// Number of pages.
    pub total: usize,
    /// Matching records before pagination.
    pub count: usize,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPage {
    pub feedback: Vec<Feedback>,
    pub pagination: Pagination,
}

/// Run `query` over `records`, which must be in insertion order.
pub fn apply(records: Vec<Feedback>, query: &ListQuery) -> FeedbackPage {
    let needle = query.search.as_deref().map(str::to_lowercase);

    let mut matching: Vec<Feedback> = records
        .into_iter()
        .filter(|r| needle.as_deref().map_or(true, |n| matches_search(r, n)))
        .filter(|r| query.category.map_or(true, |c| r.category == c))
        .filter(|r| query.status.map_or(true, |s| r.status == s))
        .collect();

    if let Some(sort) = query.sort {
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, sort.key);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let count = matching.len();
    let page = query.page.max(1);
    let limit = if query.limit == 0 {
        DEFAULT_LIMIT
    } else {
        query.limit
    };
    let start = (page - 1).saturating_mul(limit).min(count);
    let end = start.saturating_add(limit).min(count);

    FeedbackPage {
        feedback: matching.drain(start..end).collect(),
        pagination: Pagination {
            current: page,
            total: count.div_ceil(limit),
            count,
        },
    }
}

fn matches_search(record: &Feedback, needle: &str) -> bool {
    [&record.name, &record.email, &record.content]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &Feedback, b: &Feedback, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Category => a
            .category
            .as_str()
            .to_lowercase()
            .cmp(&b.category.as_str().to_lowercase()),
        SortKey::Status => a.status.priority().cmp(&b.status.priority()),
    }
}
