//! Pagination primitives shared by stores and the HTTP boundary.

use serde::{Deserialize, Serialize};

/// A page request: zero-based page number + page size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_no: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    pub fn new(page_no: usize, page_size: usize) -> Self {
        Self { page_no, page_size }
    }

    /// Offset of the first element of this page.
    pub fn offset(&self) -> usize {
        self.page_no.saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results, stable insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_no: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: usize) -> Self {
        let total_pages = if request.page_size == 0 {
            0
        } else {
            total_items.div_ceil(request.page_size)
        };
        Self {
            items,
            page_no: request.page_no,
            page_size: request.page_size,
            total_items,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 21);
    }

    #[test]
    fn zero_page_size_yields_zero_pages() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 0), 5);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
        assert_eq!(PageRequest::default().offset(), 0);
    }
}
