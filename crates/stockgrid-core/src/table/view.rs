use serde::Serialize;

use super::{
    comparator, page_count, paginate, search, stable_sort, PageSize, PaginationState, Row,
    SortDirection, SortState, TableField,
};

/// Per-table interaction state: active sort key, search text and current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<F: TableField> {
    pub sort: SortState<F>,
    pub query: String,
    pub pagination: PaginationState,
}

impl<F: TableField> TableState<F> {
    pub fn new(sort: SortState<F>, page_size: PageSize) -> Self {
        Self {
            sort,
            query: String::new(),
            pagination: PaginationState::new(page_size),
        }
    }

    /// Replace the search text. The filtered set changes, so the page resets.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.reset();
    }

    pub fn request_sort(&mut self, field: F) {
        self.sort.request(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size);
    }

    /// Called when the source collection is replaced.
    pub fn source_changed(&mut self) {
        self.pagination.reset();
    }

    pub fn headers(&self) -> Vec<ColumnHeader> {
        F::ALL
            .iter()
            .map(|field| ColumnHeader {
                name: field.name(),
                label: field.label(),
                numeric: field.is_numeric(),
                sorted: (*field == self.sort.field).then_some(self.sort.direction),
            })
            .collect()
    }

    /// Derive the visible rows: search, then stable sort, then paginate.
    ///
    /// Pure over `rows` and `self`; recomputed from scratch on every call.
    pub fn view<'a, R>(&self, rows: &'a [R]) -> TableView<'a, R>
    where
        R: Row<Field = F>,
    {
        let filtered = search(rows, &self.query);
        let sorted = stable_sort(
            &filtered,
            comparator::<&R>(self.sort.field, self.sort.direction),
        );
        let window = paginate(&sorted, self.pagination.page, self.pagination.page_size);

        TableView {
            rows: window.rows.to_vec(),
            padding: window.padding,
            total: sorted.len(),
            page: self.pagination.page,
            page_size: self.pagination.page_size,
            page_count: page_count(sorted.len(), self.pagination.page_size),
        }
    }
}

/// Header cell of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub name: &'static str,
    pub label: &'static str,
    pub numeric: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

/// Rows on screen for one table, with pager details.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub padding: usize,
    /// Rows matching the search, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub page_count: usize,
}
