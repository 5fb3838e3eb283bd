//! Catalog aggregation
//!
//! Computes a stable page of pokemon ids, optionally filtered by one or more
//! types, from an upstream API that only offers per-type membership lists and
//! a plain paginated listing.
//!
//! # Overview
//!
//! ```text
//!                    Aggregator::get_page(page, types)
//!                                 │
//!        ┌────────────────────────┼──────────────────────────┐
//!   no types                  one type                  two or more
//!        │                        │                          │
//! UnfilteredLister         TypeSetResolver        TypeSetResolver × N (concurrent)
//!  (upstream paging)              │                          │
//!                                 │                   combine (∩ / ≥2-of-N)
//!                                 └────────────┬─────────────┘
//!                                          paginate
//! ```
//!
//! Upstream failures propagate as [`crate::Error`] up to the aggregator,
//! whose public entry points log them and return empty results.

mod aggregator;
mod combiner;
mod lister;
mod resolver;

pub use aggregator::Aggregator;
pub use combiner::combine;
pub use lister::UnfilteredLister;
pub use resolver::TypeSetResolver;
