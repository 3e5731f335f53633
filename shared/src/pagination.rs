use std::ops::Range;

/// Problem cards per page (a 3x3 grid).
pub const PAGE_SIZE: usize = 9;

/// Page buttons shown either side of the current page.
pub const PAGE_WINDOW: usize = 2;

/// Pagination over a filtered collection. `current_page` is 1-based and is not
/// clamped: an out-of-range page simply has an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: usize,
}

/// Buttons to render under the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub previous: Option<usize>,
    pub pages: Vec<usize>,
    pub next: Option<usize>,
}

impl Pagination {
    pub fn new(total_items: usize, current_page: usize) -> Self {
        Self::with_page_size(total_items, current_page, PAGE_SIZE)
    }

    pub fn with_page_size(total_items: usize, current_page: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
            current_page,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Index range of the current page, clamped to the collection.
    pub fn range(&self) -> Range<usize> {
        match self.current_page.checked_sub(1) {
            Some(zero_based) => {
                let start = zero_based.saturating_mul(self.page_size).min(self.total_items);
                let end = start.saturating_add(self.page_size).min(self.total_items);
                start..end
            }
            None => 0..0,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// `None` when everything fits on one page.
    pub fn controls(&self) -> Option<PageControls> {
        let total = self.total_pages();
        if total <= 1 {
            return None;
        }
        let current = self.current_page;
        let first = current.saturating_sub(PAGE_WINDOW).max(1);
        let last = current.saturating_add(PAGE_WINDOW).min(total);
        Some(PageControls {
            current,
            previous: (current > 1).then(|| current - 1),
            pages: (first..=last).collect(),
            next: (current < total).then(|| current + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0, 0 ; "empty")]
    #[test_case(1, 1 ; "single item")]
    #[test_case(9, 1 ; "exactly one page")]
    #[test_case(10, 2 ; "one over")]
    #[test_case(27, 3 ; "three full pages")]
    #[test_case(28, 4 ; "partial last page")]
    fn test_total_pages(items: usize, expected: usize) {
        assert_eq!(Pagination::new(items, 1).total_pages(), expected);
    }

    #[test]
    fn test_no_controls_for_a_single_page() {
        assert_eq!(Pagination::new(0, 1).controls(), None);
        assert_eq!(Pagination::new(9, 1).controls(), None);
        assert!(Pagination::new(10, 1).controls().is_some());
    }

    #[test]
    fn test_window_is_clamped_to_bounds() {
        let controls = Pagination::new(100, 1).controls().unwrap();
        assert_eq!(controls.previous, None);
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert_eq!(controls.next, Some(2));

        let controls = Pagination::new(100, 6).controls().unwrap();
        assert_eq!(controls.previous, Some(5));
        assert_eq!(controls.pages, vec![4, 5, 6, 7, 8]);
        assert_eq!(controls.next, Some(7));

        let controls = Pagination::new(100, 12).controls().unwrap();
        assert_eq!(controls.pages, vec![10, 11, 12]);
        assert_eq!(controls.next, None);
    }

    #[test]
    fn test_slice_of_last_page() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(Pagination::new(20, 1).slice(&items), &items[0..9]);
        assert_eq!(Pagination::new(20, 3).slice(&items), &[18, 19]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..20).collect();
        assert!(Pagination::new(20, 0).slice(&items).is_empty());
        assert!(Pagination::new(20, 4).slice(&items).is_empty());
        assert!(Pagination::new(20, usize::MAX).slice(&items).is_empty());

        let controls = Pagination::new(20, 7).controls().unwrap();
        assert_eq!(controls.previous, Some(6));
        assert!(controls.pages.is_empty());
        assert_eq!(controls.next, None);
    }

    proptest! {
        #[test]
        fn prop_pages_partition_the_collection(items in 0usize..200) {
            let pagination = Pagination::new(items, 1);
            let total = pagination.total_pages();
            prop_assert_eq!(total, (items + PAGE_SIZE - 1) / PAGE_SIZE);
            let covered: usize = (1..=total)
                .map(|page| Pagination::new(items, page).range().len())
                .sum();
            prop_assert_eq!(covered, items);
        }
    }
}
