use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Date of a point in a value series.
///
/// The upstream API sends dates in whatever shape its store holds (`2023-01-05`,
/// `2023-01-05T00:00:00`, `2023-01-05 00:00:00`, full RFC3339). The text is kept
/// verbatim and ordered lexicographically, like every other text column, so a single
/// unusual shape never fails the whole series.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesDate(String);

impl SeriesDate {
    /// Accept any non-blank date text, trimmed.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::InvalidDate {
                value: input.to_owned(),
            });
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SeriesDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
