//! Pagination module - page sequence generation for the table views.

mod pagination_model;

pub use pagination_model::PageItem;

use crate::constants::MAX_VISIBLE_PAGES;

/// Generates the sequence of page markers for a pager with `total_pages`
/// pages and the cursor on `current_page` (1-based).
///
/// Policy, evaluated in order:
/// 1. Seven pages or fewer: every page, no ellipsis.
/// 2. Cursor among the first 3 pages: the first 3, an ellipsis, the last 2.
/// 3. Cursor among the last 3 pages: the first 2, an ellipsis, the last 3.
/// 4. Otherwise: first page, ellipsis, the cursor and its neighbors,
///    ellipsis, last page.
///
/// Inputs are taken as given; an out-of-range cursor still produces a
/// sequence from the matching branch.
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages > 0 && !(1..=total_pages).contains(&current_page) {
        log::warn!(
            "current page {} is outside 1..={}",
            current_page,
            total_pages
        );
    }

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    if current_page <= 3 {
        return vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Ellipsis,
            PageItem::Page(total_pages - 1),
            PageItem::Page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Ellipsis,
            PageItem::Page(total_pages - 2),
            PageItem::Page(total_pages - 1),
            PageItem::Page(total_pages),
        ];
    }

    vec![
        PageItem::Page(1),
        PageItem::Ellipsis,
        PageItem::Page(current_page - 1),
        PageItem::Page(current_page),
        PageItem::Page(current_page + 1),
        PageItem::Ellipsis,
        PageItem::Page(total_pages),
    ]
}
