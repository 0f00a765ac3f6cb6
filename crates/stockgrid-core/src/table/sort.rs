use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{FieldValue, Row, TableField};

/// Sort direction of the active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Single active sort key of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F: TableField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: TableField> SortState<F> {
    pub const fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Apply a user sort request: the active field flips direction, any other field
    /// becomes active in ascending order.
    pub fn request(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Natural order of two values of the same field.
///
/// Numbers compare numerically under IEEE total order. Dates and text compare by
/// byte-wise lexicographic order of their text, independent of locale.
pub fn natural_order(left: FieldValue<'_>, right: FieldValue<'_>) -> Ordering {
    match (left, right) {
        (FieldValue::Number(left), FieldValue::Number(right)) => left.total_cmp(&right),
        (FieldValue::Date(left), FieldValue::Date(right)) => left.cmp(right),
        (FieldValue::Text(left), FieldValue::Text(right)) => left.cmp(right),
        (left, right) => left.to_string().cmp(&right.to_string()),
    }
}

/// Build the ordering function for `field` in `direction`.
///
/// Descending swaps the operands instead of negating the result, so it is the exact
/// inverse of ascending.
pub fn comparator<R: Row>(
    field: R::Field,
    direction: SortDirection,
) -> impl Fn(&R, &R) -> Ordering {
    move |left: &R, right: &R| match direction {
        SortDirection::Ascending => natural_order(left.field(field), right.field(field)),
        SortDirection::Descending => natural_order(right.field(field), left.field(field)),
    }
}

/// Sort a copy of `rows`; rows that compare equal keep their original relative order.
///
/// Each row is decorated with its input index and ties are broken on it, so the
/// result is stable regardless of the underlying sort routine.
pub fn stable_sort<T, C>(rows: &[T], compare: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut decorated = rows.iter().enumerate().collect::<Vec<_>>();
    decorated.sort_unstable_by(|&(left_index, left), &(right_index, right)| {
        compare(left, right).then_with(|| left_index.cmp(&right_index))
    });
    decorated.into_iter().map(|(_, row)| row.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Instrument, InstrumentField, InstrumentId};

    fn instrument(id: u64, stock: &str, sector: &str) -> Instrument {
        Instrument::new(InstrumentId::new(id), stock, "Tech", sector, "USD")
    }

    #[test]
    fn requesting_active_field_flips_direction() {
        let mut state = SortState::ascending(InstrumentField::Stock);

        state.request(InstrumentField::Stock);
        assert_eq!(state.direction, SortDirection::Descending);

        state.request(InstrumentField::Stock);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn requesting_new_field_resets_to_ascending() {
        let mut state = SortState::new(InstrumentField::Stock, SortDirection::Descending);

        state.request(InstrumentField::Sector);
        assert_eq!(state, SortState::ascending(InstrumentField::Sector));
    }

    #[test]
    fn numeric_fields_compare_numerically() {
        let rows = vec![instrument(10, "A", "X"), instrument(9, "B", "X")];
        let sorted = stable_sort(
            &rows,
            comparator::<Instrument>(InstrumentField::Id, SortDirection::Ascending),
        );

        // Lexicographic order would put "10" first.
        assert_eq!(sorted[0].id, InstrumentId::new(9));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![
            instrument(1, "C", "Y"),
            instrument(2, "A", "X"),
            instrument(3, "B", "Y"),
            instrument(4, "D", "X"),
        ];

        let sorted = stable_sort(
            &rows,
            comparator::<Instrument>(InstrumentField::Sector, SortDirection::Ascending),
        );
        let ids = sorted.iter().map(|row| row.id.get()).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let sorted = stable_sort(
            &rows,
            comparator::<Instrument>(InstrumentField::Sector, SortDirection::Descending),
        );
        let ids = sorted.iter().map(|row| row.id.get()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let rows = vec![instrument(2, "B", "X"), instrument(1, "A", "X")];
        let _ = stable_sort(
            &rows,
            comparator::<Instrument>(InstrumentField::Stock, SortDirection::Ascending),
        );
        assert_eq!(rows[0].stock, "B");
    }
}
