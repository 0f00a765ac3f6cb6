use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Rows per page. Only the sizes offered by the pager are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Five, Self::Ten, Self::TwentyFive];

    pub const fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            25 => Ok(Self::TwentyFive),
            _ => Err(ValidationError::InvalidPageSize { value }),
        }
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page of a table. `page` is zero-based and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: PageSize,
}

impl PaginationState {
    pub const fn new(page_size: PageSize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }
}

/// Visible slice of a collection plus the blank rows that keep a short last page as
/// tall as a full one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow<'a, T> {
    pub rows: &'a [T],
    pub padding: usize,
}

impl<T> PageWindow<'_, T> {
    /// Real rows plus padding rows.
    pub fn height(&self) -> usize {
        self.rows.len() + self.padding
    }
}

/// Slice `[page * size, page * size + size)` out of `rows`, clamped to its bounds.
///
/// An out-of-range page yields an empty window rather than an error. Padding is only
/// added past the first page.
pub fn paginate<T>(rows: &[T], page: usize, page_size: PageSize) -> PageWindow<'_, T> {
    let size = page_size.get();
    let start = page.saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());

    let padding = if page > 0 {
        page.saturating_add(1)
            .saturating_mul(size)
            .saturating_sub(rows.len())
    } else {
        0
    };

    PageWindow {
        rows: &rows[start..end],
        padding,
    }
}

/// Number of pages needed to show `total` rows; an empty collection has none.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_only_accepts_offered_sizes() {
        assert_eq!(PageSize::try_from(10).expect("valid"), PageSize::Ten);
        let err = PageSize::try_from(7).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPageSize { value: 7 }));
    }

    #[test]
    fn second_page_of_seven_rows_pads_to_five() {
        let rows = (1..=7).collect::<Vec<_>>();
        let window = paginate(&rows, 1, PageSize::Five);

        assert_eq!(window.rows, &[6, 7]);
        assert_eq!(window.padding, 3);
        assert_eq!(window.height(), 5);
    }

    #[test]
    fn short_first_page_is_not_padded() {
        let rows = [1, 2];
        let window = paginate(&rows, 0, PageSize::Five);
        assert_eq!(window.rows, &[1, 2]);
        assert_eq!(window.padding, 0);
    }

    #[test]
    fn out_of_range_page_is_empty_and_fully_padded() {
        let rows = [1, 2, 3];
        let window = paginate(&rows, 4, PageSize::Five);
        assert!(window.rows.is_empty());
        assert_eq!(window.padding, 22);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let mut state = PaginationState::new(PageSize::Five);
        state.set_page(3);
        state.set_page_size(PageSize::TwentyFive);
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, PageSize::TwentyFive);
    }

    #[test]
    fn counts_pages() {
        assert_eq!(page_count(0, PageSize::Five), 0);
        assert_eq!(page_count(5, PageSize::Five), 1);
        assert_eq!(page_count(7, PageSize::Five), 2);
    }
}
