use super::{Row, TableField};

/// Keep the rows where at least one of `fields` contains `query`, ignoring case.
///
/// Always filters from the full `rows` slice; an empty query keeps every row in
/// its original order.
pub fn search_filter<'a, R: Row>(rows: &'a [R], query: &str, fields: &[R::Field]) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| {
            fields.iter().any(|field| {
                row.field(*field)
                    .to_string()
                    .to_lowercase()
                    .contains(needle.as_str())
            })
        })
        .collect()
}

/// [`search_filter`] over the row shape's declared searchable columns.
pub fn search<'a, R: Row>(rows: &'a [R], query: &str) -> Vec<&'a R> {
    search_filter(rows, query, <R::Field as TableField>::SEARCHABLE)
}
