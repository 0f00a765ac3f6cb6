use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::table::{comparator, stable_sort};
use crate::{AppState, CoreError, SeriesDate, UtcDateTime, ValidationError, ValuePoint};

/// JSON document written by "export to JSON".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesExport {
    pub stock: String,
    pub exported_at: UtcDateTime,
    pub values: Vec<ExportedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPoint {
    pub date: SeriesDate,
    pub value: f64,
}

impl SeriesExport {
    pub fn new<'a, I>(stock: impl Into<String>, points: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a ValuePoint>,
    {
        let values = points
            .into_iter()
            .map(|point| ExportedPoint {
                date: point.date.clone(),
                value: point.value,
            })
            .collect::<Vec<_>>();

        if values.is_empty() {
            return Err(ValidationError::EmptyExport);
        }

        Ok(Self {
            stock: stock.into(),
            exported_at: UtcDateTime::now(),
            values,
        })
    }

    /// Export the loaded series of the selected instrument, in the table's sort order.
    pub fn from_state(state: &AppState) -> Result<Self, ValidationError> {
        if !state.can_export() {
            return Err(ValidationError::EmptyExport);
        }

        let sort = state.value_table().sort;
        let sorted = stable_sort(
            state.values(),
            comparator::<ValuePoint>(sort.field, sort.direction),
        );
        Self::new(state.selected_name(), sorted.iter())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %path.display(), points = self.values.len(), "series exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_empty_series() {
        let err = SeriesExport::new("AAA", std::iter::empty()).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyExport);
    }

    #[test]
    fn renders_camel_case_document() {
        let point = ValuePoint::new("AAA", SeriesDate::parse("2023-01-05").expect("date"), 4.5);
        let export = SeriesExport::new("AAA", [&point]).expect("export");
        let json = export.to_json_pretty().expect("json");

        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"date\": \"2023-01-05\""));
        assert!(json.contains("\"value\": 4.5"));
    }
}
