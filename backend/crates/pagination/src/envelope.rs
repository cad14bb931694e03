//! Page envelope returned by listing endpoints.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Number of pages needed to hold `total` items at `size` items per page.
///
/// Returns `0` for an empty collection or a zero size.
///
/// # Examples
///
/// ```
/// use pagination::page_count;
///
/// assert_eq!(page_count(20, 3), 7);
/// assert_eq!(page_count(0, 50), 0);
/// ```
#[must_use]
pub fn page_count(total: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(size))
}

/// One page of an ordered collection plus paging metadata.
///
/// ## Invariants
/// - `items.len() <= size`
/// - `pages == ceil(total / size)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    size: u32,
    total: u64,
    pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from items already windowed by the caller.
    ///
    /// Database adapters use this after running `LIMIT`/`OFFSET` and a
    /// separate count query. Items beyond `request.size()` are dropped.
    #[must_use]
    pub fn new(mut items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        items.truncate(size);
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
            pages: page_count(total, request.size()),
        }
    }

    /// Window a fully materialised collection.
    #[must_use]
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let total = u64::try_from(all.len()).unwrap_or(u64::MAX);
        Self::new(request.window(all).to_vec(), request, total)
    }

    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages at the requested size.
    #[must_use]
    pub const fn pages(&self) -> u64 {
        self.pages
    }

    /// Convert every item while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            pages: self.pages,
        }
    }
}
