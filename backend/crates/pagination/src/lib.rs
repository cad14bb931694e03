//! Page-number pagination primitives shared by user directory endpoints.
//!
//! Listings are addressed with a 1-based `page` number and a `size`. A
//! [`PageRequest`] is the validated form of those two values; a [`Page`] is the
//! JSON envelope returned to clients:
//!
//! ```json
//! { "items": [], "page": 1, "size": 50, "total": 0, "pages": 0 }
//! ```
//!
//! Requests past the last page are valid and produce an empty `items` list.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 2).expect("valid request");
//! let page = Page::from_slice(&[1, 2, 3, 4, 5], request);
//!
//! assert_eq!(page.items(), &[3, 4]);
//! assert_eq!(page.total(), 5);
//! assert_eq!(page.pages(), 3);
//! ```

mod envelope;
mod request;

pub use envelope::{Page, page_count};
pub use request::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageParams, PageRequest, PageRequestError,
};
