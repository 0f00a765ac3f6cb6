use std::fmt::{Debug, Display, Formatter};

use crate::{SeriesDate, ValidationError};

/// Typed value of one field of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(&'a SeriesDate),
}

impl Display for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Date(date) => f.write_str(date.as_str()),
        }
    }
}

/// Closed set of columns declared by a row shape.
///
/// Implementors are plain enums, so every sort key and search column is checked
/// against the row shape at compile time. Free-form names only enter through
/// [`TableField::parse`].
pub trait TableField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every declared column, in display order.
    const ALL: &'static [Self];
    /// Columns consulted by the search filter.
    const SEARCHABLE: &'static [Self];

    /// Stable machine name, matching the wire field name.
    fn name(self) -> &'static str;

    /// Column header text.
    fn label(self) -> &'static str;

    fn is_numeric(self) -> bool;

    fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownField {
                value: input.to_owned(),
                expected: Self::ALL
                    .iter()
                    .map(|field| field.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A record shown in a table, with typed access to each of its declared fields.
pub trait Row {
    type Field: TableField;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<R: Row + ?Sized> Row for &R {
    type Field = R::Field;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        (**self).field(field)
    }
}
