//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
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
    /// Creates a request for a specific page with the default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    /// Slices one page out of an already-sorted result set.
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T]) -> PageResponse<T> {
        let per_page = self.per_page.max(1);
        let page = self.page.max(1);
        let offset = (page as usize - 1).saturating_mul(per_page as usize);

        let data = items
            .iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();

        PageResponse::new(data, page, per_page, items.len() as u64)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl PageMeta {
    /// Returns true if a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if an earlier page exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(u64::from(per_page.max(1)))).unwrap_or(u32::MAX)
        };

        Self {
            data,
            meta: PageMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_paginate_slices_sorted_items() {
        let items: Vec<u32> = (1..=45).collect();
        let page = PageRequest { page: 2, per_page: 20 }.paginate(&items);
        assert_eq!(page.data.first(), Some(&21));
        assert_eq!(page.data.len(), 20);
        assert_eq!(page.meta.total, 45);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.has_next());
        assert!(page.meta.has_prev());
    }

    #[test]
    fn test_paginate_empty_set() {
        let page = PageRequest::default().paginate::<u32>(&[]);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 1);
        assert!(!page.meta.has_next());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(7, 7)]
    fn test_page_number_is_clamped(#[case] requested: u32, #[case] effective: u32) {
        let req = PageRequest::page(requested);
        assert_eq!(req.page, effective);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = PageRequest { page: 9, per_page: 20 }.paginate(&items);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 5);
    }
}
