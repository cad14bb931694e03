//! Validated page requests and their raw query-string form.

use serde::Deserialize;
use thiserror::Error;

/// Page number used when the client omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client omits `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Reasons a raw page request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// `page` was zero, negative, or too large to address.
    #[error("page must be a positive integer, got {value}")]
    InvalidPage {
        /// Rejected raw value.
        value: i64,
    },
    /// `size` fell outside `1..=MAX_PAGE_SIZE`.
    #[error("size must be between 1 and {max}, got {value}")]
    InvalidSize {
        /// Rejected raw value.
        value: i64,
        /// Upper bound in force.
        max: u32,
    },
}

impl PageRequestError {
    /// Query parameter the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "page",
            Self::InvalidSize { .. } => "size",
        }
    }
}

/// Raw `page`/`size` query parameters as sent by clients.
///
/// Values are signed so that negative input reaches validation instead of
/// failing deserialisation with a less helpful message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    /// Requested 1-based page number.
    pub page: Option<i64>,
    /// Requested page size.
    pub size: Option<i64>,
}

/// A validated, 1-based page request.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= size <= MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when `page` is zero or `size` lies outside
    /// `1..=MAX_PAGE_SIZE`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert!(PageRequest::new(1, 10).is_ok());
    /// assert!(PageRequest::new(0, 10).is_err());
    /// assert!(PageRequest::new(1, 0).is_err());
    /// ```
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::InvalidPage { value: 0 });
        }
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(PageRequestError::InvalidSize {
                value: i64::from(size),
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self { page, size })
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }

    /// Alias for [`PageRequest::size`] widened for query builders.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }

    /// Borrow the window of `items` this request addresses.
    ///
    /// Windows that start past the end of `items` are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let items = [1, 2, 3];
    /// let request = PageRequest::new(3, 2).expect("valid request");
    /// assert!(request.window(&items).is_empty());
    /// ```
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).map_or(len, |offset| offset.min(len));
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(len);
        items.get(start..end).unwrap_or_default()
    }
}

impl TryFrom<PageParams> for PageRequest {
    type Error = PageRequestError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let raw_page = params.page.unwrap_or(i64::from(DEFAULT_PAGE));
        let raw_size = params.size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        let page = u32::try_from(raw_page)
            .ok()
            .filter(|page| *page > 0)
            .ok_or(PageRequestError::InvalidPage { value: raw_page })?;
        let size = u32::try_from(raw_size)
            .ok()
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .ok_or(PageRequestError::InvalidSize {
                value: raw_size,
                max: MAX_PAGE_SIZE,
            })?;

        Ok(Self { page, size })
    }
}
