//! Pagination types for the ledger table.

use serde::{Deserialize, Serialize};

/// Page sizes the report view offers.
pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

/// Request parameters for a ledger page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of records per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// The first page at the given size.
    ///
    /// Callers reset to this whenever any filter changes.
    #[must_use]
    pub const fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    /// Clamps the request to a valid page number and an offered page size.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: if PAGE_SIZES.contains(&self.per_page) {
                self.per_page
            } else {
                default_per_page()
            },
        }
    }

    /// Index of the first record on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * (self.per_page as usize)
    }

    /// Maximum number of records on this page.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The records on the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Total number of records across all pages.
    pub total: u64,
    /// Total number of pages, at least 1 even for an empty set.
    pub total_pages: u32,
}

impl PageMeta {
    /// Computes metadata for a total record count.
    #[must_use]
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let per = u64::from(per_page.max(1));
        let total_pages = if total == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(per)).unwrap_or(u32::MAX)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            data,
            meta: PageMeta::new(page, per_page, total),
        }
    }
}
