//! Client-side pagination model.
//!
//! A pure page/limit/total-pages state machine shared by the concert list
//! and the transaction history. Transitions are bounds-checked; the owning
//! reducer decides whether a transition triggers a re-fetch.

use encore_api::types::PageMeta;
use serde::{Deserialize, Serialize};

/// Pagination state for one listing.
///
/// Invariants (whenever `pages >= 1`): `1 <= page <= pages`, and `pages`
/// tracks the server's `ceil(total / limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: u32,
    limit: u32,
    pages: u32,
    total: u64,
}

impl PageState {
    /// Create pagination state starting at page 1.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: if limit == 0 { 1 } else { limit },
            pages: 1,
            total: 0,
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Total page count as last reported by the server.
    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Total item count as last reported by the server.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whether the current page is the first.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Whether the current page is the last.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page >= self.pages
    }

    /// Adopt fresh metadata from a server response.
    ///
    /// The server's `page` is authoritative - a fetch for a page that no
    /// longer exists comes back clamped by the backend.
    pub const fn apply_meta(&mut self, meta: &PageMeta) {
        self.page = if meta.page == 0 { 1 } else { meta.page };
        self.limit = if meta.limit == 0 { 1 } else { meta.limit };
        self.pages = meta.pages;
        self.total = meta.total;
    }

    /// Jump to a specific page.
    ///
    /// Returns `true` when the page actually changed. A request for the
    /// current page or one outside `[1, pages]` is a no-op.
    pub const fn go_to_page(&mut self, page: u32) -> bool {
        if page == self.page || page == 0 || page > self.pages {
            return false;
        }
        self.page = page;
        true
    }

    /// Step to the next page; bounded at the last page.
    pub const fn next(&mut self) -> bool {
        if self.page < self.pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Step to the previous page; bounded at page 1.
    pub const fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Expected total page count for a given item count and page size.
    #[must_use]
    pub fn expected_pages(total: u64, limit: u32) -> u32 {
        let limit = u64::from(limit.max(1));
        u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn meta(total: u64, page: u32, limit: u32) -> PageMeta {
        PageMeta {
            total,
            page,
            limit,
            pages: PageState::expected_pages(total, limit),
        }
    }

    #[test]
    fn twelve_items_at_five_per_page_is_three_pages() {
        let mut state = PageState::new(5);
        state.apply_meta(&meta(12, 1, 5));
        assert_eq!(state.pages(), 3);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn go_to_page_rejects_out_of_bounds_and_same_page() {
        let mut state = PageState::new(5);
        state.apply_meta(&meta(12, 1, 5));

        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(1)); // already there
        assert!(!state.go_to_page(4)); // past the end
        assert!(state.go_to_page(3));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn next_and_prev_are_bounded() {
        let mut state = PageState::new(5);
        state.apply_meta(&meta(12, 1, 5));

        assert!(!state.prev());
        assert!(state.next());
        assert!(state.next());
        assert!(!state.next()); // page 3 of 3
        assert_eq!(state.page(), 3);
        assert!(state.prev());
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn empty_listing_stays_on_page_one() {
        let mut state = PageState::new(5);
        state.apply_meta(&meta(0, 1, 5));
        assert_eq!(state.pages(), 0);
        assert!(!state.next());
        assert!(!state.prev());
        assert_eq!(state.page(), 1);
    }

    proptest! {
        #[test]
        fn pages_is_always_ceil_of_total_over_limit(total in 0u64..100_000, limit in 1u32..500) {
            let pages = PageState::expected_pages(total, limit);
            let limit_u64 = u64::from(limit);
            prop_assert_eq!(u64::from(pages), total.div_ceil(limit_u64));
        }

        #[test]
        fn transitions_never_leave_bounds(
            total in 1u64..10_000,
            limit in 1u32..100,
            jumps in proptest::collection::vec(0u32..50, 0..20),
        ) {
            let mut state = PageState::new(limit);
            state.apply_meta(&meta(total, 1, limit));

            for jump in jumps {
                match jump % 3 {
                    0 => { state.next(); },
                    1 => { state.prev(); },
                    _ => { state.go_to_page(jump); },
                }
                prop_assert!(state.page() >= 1);
                prop_assert!(state.page() <= state.pages());
            }
        }
    }
}
