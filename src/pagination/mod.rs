//! Pagination module
//!
//! Page arithmetic for identifier sequences.
//!
//! # Overview
//!
//! Filtered views are paginated locally: the full id sequence is computed
//! first and [`paginate`] slices one fixed-size page out of it. The unfiltered
//! view relies on the upstream listing and only borrows [`page_offset`] and
//! [`total_pages`] from here.

mod paginator;

pub use paginator::{page_offset, paginate, total_pages};
