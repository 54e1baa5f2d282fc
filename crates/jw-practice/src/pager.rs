use std::ops::Range;

use serde::Serialize;
use thiserror::Error;

/// Requested page does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {requested} is out of range (1..={number_of_pages})")]
pub struct PageOutOfRange {
    pub requested: usize,
    pub number_of_pages: usize,
}

/// 1-based pagination state over a list of `total_items` items.
///
/// With zero items (or zero items per page) there are no pages and no
/// current page. Otherwise the current page always lies in
/// `1..=number_of_pages()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    total_items: usize,
    items_per_page: usize,
    current_page: Option<usize>,
}

impl Pager {
    /// Create a pager positioned on the first page (if there is one)
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        let mut pager = Self {
            total_items,
            items_per_page,
            current_page: None,
        };
        pager.current_page = pager.first_page();
        pager
    }

    /// Number of pages, rounding the last partial page up
    pub const fn number_of_pages(&self) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.items_per_page)
    }

    pub const fn first_page(&self) -> Option<usize> {
        if self.number_of_pages() == 0 {
            None
        } else {
            Some(1)
        }
    }

    pub const fn last_page(&self) -> Option<usize> {
        match self.number_of_pages() {
            0 => None,
            n => Some(n),
        }
    }

    pub const fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    /// Page before the current one, `None` on the first page
    pub fn previous_page(&self) -> Option<usize> {
        self.current_page.filter(|&page| page > 1).map(|page| page - 1)
    }

    /// Page after the current one, `None` on the last page
    pub fn next_page(&self) -> Option<usize> {
        let last = self.last_page()?;
        self.current_page
            .filter(|&page| page < last)
            .map(|page| page + 1)
    }

    /// Move to `page`. Out-of-range pages leave the pager untouched.
    pub fn set_current_page(&mut self, page: usize) -> Result<(), PageOutOfRange> {
        let number_of_pages = self.number_of_pages();
        if page == 0 || page > number_of_pages {
            return Err(PageOutOfRange {
                requested: page,
                number_of_pages,
            });
        }
        self.current_page = Some(page);
        Ok(())
    }

    /// Item indices (0-based, end exclusive) shown on the current page
    pub fn item_range(&self) -> Option<Range<usize>> {
        let page = self.current_page?;
        let start = (page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.total_items);
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pager_has_no_pages() {
        let pager = Pager::new(0, 1);
        assert_eq!(pager.number_of_pages(), 0);
        assert_eq!(pager.current_page(), None);
        assert_eq!(pager.previous_page(), None);
        assert_eq!(pager.next_page(), None);
        assert_eq!(pager.item_range(), None);

        let pager = Pager::new(5, 0);
        assert_eq!(pager.number_of_pages(), 0);
        assert_eq!(pager.current_page(), None);
    }

    #[test]
    fn test_number_of_pages_rounds_up() {
        assert_eq!(Pager::new(10, 3).number_of_pages(), 4);
        assert_eq!(Pager::new(9, 3).number_of_pages(), 3);
        assert_eq!(Pager::new(1, 1).number_of_pages(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut pager = Pager::new(3, 1);
        assert_eq!(pager.current_page(), Some(1));
        assert_eq!(pager.previous_page(), None);
        assert_eq!(pager.next_page(), Some(2));

        pager.set_current_page(3).unwrap();
        assert_eq!(pager.previous_page(), Some(2));
        assert_eq!(pager.next_page(), None);
    }

    #[test]
    fn test_out_of_range_page_is_rejected() {
        let mut pager = Pager::new(3, 1);
        pager.set_current_page(2).unwrap();

        let err = pager.set_current_page(4).unwrap_err();
        assert_eq!(
            err,
            PageOutOfRange {
                requested: 4,
                number_of_pages: 3
            }
        );
        assert!(pager.set_current_page(0).is_err());

        // State is unchanged after a rejected move
        assert_eq!(pager.current_page(), Some(2));
    }

    #[test]
    fn test_item_range_clamps_last_page() {
        let mut pager = Pager::new(7, 3);
        assert_eq!(pager.item_range(), Some(0..3));

        pager.set_current_page(3).unwrap();
        assert_eq!(pager.item_range(), Some(6..7));
    }
}
