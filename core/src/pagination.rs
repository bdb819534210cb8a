//! Offset/limit paging shared by every listing endpoint.
//!
//! [`paginate`] is a pure function of the total match count, the page size,
//! the offset and the already-fetched page. Navigation links always point at
//! the generic listing path, whichever endpoint produced the page.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Path used for `next_page` and `previous_page` links.
pub const LISTING_PATH: &str = "/songs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_pages: i64,
    pub current_page: i64,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationEnvelope<T> {
    pub take: i64,
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Wraps one page of `items` with page metadata.
///
/// `limit` must be positive and `offset` non-negative; [`PageRequest`] takes
/// care of that for request parameters. Offsets past the last page are not an
/// error: the page number is computed arithmetically and only
/// `previous_page` is linked.
pub fn paginate<T>(total_count: i64, limit: i64, offset: i64, items: Vec<T>) -> PaginationEnvelope<T> {
    let total_pages = total_count / limit + i64::from(total_count % limit != 0);
    let current_page = (offset / limit).saturating_add(1);

    let next_page =
        (current_page < total_pages).then(|| page_link(limit, offset.saturating_add(limit)));
    let previous_page = (current_page > 1).then(|| page_link(limit, offset - limit));

    PaginationEnvelope {
        take: limit,
        data: items,
        pagination: PageInfo {
            total_pages,
            current_page,
            next_page,
            previous_page,
        },
    }
}

fn page_link(limit: i64, offset: i64) -> String {
    format!("{LISTING_PATH}?limit={limit}&offset={offset}")
}

/// Validated `limit`/`offset` pair taken from raw query string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageRequest {
    /// Missing, unparsable or non-positive limits fall back to
    /// [`DEFAULT_LIMIT`]; missing, unparsable or negative offsets to 0.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v >= 0)
            .unwrap_or(DEFAULT_OFFSET);

        Self { limit, offset }
    }

    pub fn envelope<T>(&self, total_count: i64, items: Vec<T>) -> PaginationEnvelope<T> {
        paginate(total_count, self.limit, self.offset, items)
    }
}
