//! Client-side table engine.
//!
//! Rows flow through a fixed pipeline: [`search_filter`] over the full collection,
//! [`stable_sort`] with a [`comparator`] for the active [`SortState`], then
//! [`paginate`] into a [`PageWindow`]. [`TableState::view`] runs the whole pipeline.
//! [`SelectionState`] tracks the single selected instrument.

mod field;
mod pagination;
mod search;
mod selection;
mod sort;
mod view;

pub use field::{FieldValue, Row, TableField};
pub use pagination::{page_count, paginate, PageSize, PageWindow, PaginationState};
pub use search::{search, search_filter};
pub use selection::{SelectionChange, SelectionState};
pub use sort::{comparator, natural_order, stable_sort, SortDirection, SortState};
pub use view::{ColumnHeader, TableState, TableView};
