use serde::{Deserialize, Serialize};

use crate::feedback::{Category, Status};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Raw list parameters, exactly as they arrive in a query string.
///
/// Everything is an optional string so that malformed values never fail
/// extraction; [`ListQuery::from`] decides what each one means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    /// Build from decoded query pairs, in the order they arrived.
    ///
    /// A repeated `category` or `status` names no single value, so that
    /// filter is dropped. Other repeated keys keep their first value.
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = ListParams::default();
        let mut repeated_category = false;
        let mut repeated_status = false;

        for (key, value) in pairs {
            let (slot, repeated) = match key.as_ref() {
                "page" => (&mut params.page, None),
                "limit" => (&mut params.limit, None),
                "search" => (&mut params.search, None),
                "sort" => (&mut params.sort, None),
                "order" => (&mut params.order, None),
                "category" => (&mut params.category, Some(&mut repeated_category)),
                "status" => (&mut params.status, Some(&mut repeated_status)),
                _ => continue,
            };
            match (slot.is_some(), repeated) {
                (false, _) => *slot = Some(value.into()),
                (true, Some(flag)) => *flag = true,
                (true, None) => {}
            }
        }

        if repeated_category {
            params.category = None;
        }
        if repeated_status {
            params.status = None;
        }
        params
    }
}

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Status,
}

impl SortKey {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "category" => Some(SortKey::Category),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// A resolved listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub sort: Option<Sort>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            category: None,
            status: None,
            sort: None,
        }
    }
}

impl ListQuery {
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(Sort { key, direction });
        self
    }
}

/// Permissive resolution: values that cannot be used fall back to their
/// defaults (page, limit) or drop the corresponding step (filters, sort).
impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        let page = positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = positive(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);

        let sort = params
            .sort
            .as_deref()
            .and_then(SortKey::parse)
            .map(|key| Sort {
                key,
                direction: params
                    .order
                    .as_deref()
                    .and_then(SortDirection::parse)
                    .unwrap_or_default(),
            });

        ListQuery {
            page,
            limit,
            search: params.search.filter(|s| !s.is_empty()),
            category: params.category.as_deref().and_then(|c| c.parse().ok()),
            status: params.status.as_deref().and_then(|s| s.parse().ok()),
            sort,
        }
    }
}

fn positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}
