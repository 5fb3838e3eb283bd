//! Local pagination over an id sequence

use crate::types::{PagedResult, PaginationInfo, PokemonId};
use std::num::NonZeroU32;

/// Number of pages needed for `total_count` entries, never below 1
pub fn total_pages(total_count: u32, page_size: NonZeroU32) -> u32 {
    total_count.div_ceil(page_size.get()).max(1)
}

/// Zero-based offset of the first entry on a 1-based `page`.
///
/// Page 0 is treated as page 1.
pub fn page_offset(page: u32, page_size: NonZeroU32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size.get())
}

/// Slice one page out of `ids` and compute its pagination metadata.
///
/// Pages past the end yield an empty slice; `page` is reported back
/// unchanged.
pub fn paginate(ids: &[PokemonId], page: u32, page_size: NonZeroU32) -> PagedResult {
    let total_count = u32::try_from(ids.len()).unwrap_or(u32::MAX);
    let total_pages = total_pages(total_count, page_size);

    let start = (page_offset(page, page_size) as usize).min(ids.len());
    let end = start.saturating_add(page_size.get() as usize).min(ids.len());

    PagedResult {
        identifiers: ids[start..end].to_vec(),
        pagination: PaginationInfo {
            current_page: page,
            total_pages,
            total_count,
            has_next: page < total_pages,
            has_previous: page > 1,
        },
    }
}
