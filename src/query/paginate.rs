//! Offset pagination over an already filtered and sorted sequence.

/// One page of results plus the page count for the whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty sequence
    pub total_pages: usize,
}

/// Slice out the 1-based `page` at `per_page` items per page.
///
/// A page beyond `total_pages` yields an empty slice; the page number
/// is not clamped, so callers rendering page controls cap it
/// themselves.
///
/// # Panics
///
/// Panics if `per_page` is zero.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    assert!(per_page > 0, "per_page must be positive");

    let total_pages = std::cmp::max(1, (items.len() + per_page - 1) / per_page);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());

    let items = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page { items, total_pages }
}
