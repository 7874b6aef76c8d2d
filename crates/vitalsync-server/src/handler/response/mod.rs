//! Response types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod chat;
mod envelope;
mod errors;
mod goals;
mod health;
mod status;
mod users;

pub use chat::*;
pub use envelope::*;
pub use errors::*;
pub use goals::*;
pub use health::*;
pub use status::*;
pub use users::*;

/// Generic paginated response wrapper.
///
/// Provides a consistent structure for all paginated API responses with
/// 1-based offset pagination. `has_next`/`has_prev` are derived from the
/// page number and total page count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "{T}sPage")]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total count of items matching the query.
    pub total: u64,
    /// 1-based index of this page.
    pub page: u32,
    /// Maximum number of items per page.
    pub size: u32,
    /// Total number of pages.
    pub pages: u32,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Creates an empty page with no items.
    pub fn empty(size: u32) -> Self {
        Self::new(Vec::new(), 0, 1, size)
    }

    /// Creates a new page, deriving the page count and neighbor flags.
    ///
    /// A `size` of zero is treated as one item per page.
    pub fn new(items: Vec<T>, total: u64, page: u32, size: u32) -> Self {
        let pages = total.div_ceil(u64::from(size.max(1))) as u32;

        Self {
            items,
            total,
            page,
            size,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }

    /// Maps items from one type to another.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_derives_neighbor_flags() {
        let page = Page::new(vec![1, 2, 3], 10, 2, 3);

        assert_eq!(page.pages, 4);
        assert!(page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn first_and_last_pages() {
        let first = Page::new(vec![1, 2, 3], 6, 1, 3);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last = Page::new(vec![4, 5, 6], 6, 2, 3);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn empty_page() {
        let page = Page::<i64>::empty(20);

        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn page_map_preserves_metadata() {
        let page = Page::new(vec![1, 2], 2, 1, 2).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
    }
}
