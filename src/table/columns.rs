//! Conversion between column-oriented mappings and flat row-major data.

use indexmap::IndexMap;

/// Column name -> ordered cell values, in header order.
pub type ColumnMap = IndexMap<String, Vec<String>>;

/// Flatten `columns` into `(headers, data)`.
/// Short columns are padded with empty strings up to the longest one.
pub fn flatten(columns: &ColumnMap) -> (Vec<String>, Vec<String>) {
    let headers: Vec<String> = columns.keys().cloned().collect();
    let rows = columns.values().map(Vec::len).max().unwrap_or(0);

    let mut data = Vec::with_capacity(rows * headers.len());
    for r in 0..rows {
        for values in columns.values() {
            data.push(values.get(r).cloned().unwrap_or_default());
        }
    }

    (headers, data)
}

/// Inverse of [`flatten`] over the complete rows of `data`.
/// Duplicate headers collapse into one key, the rightmost column winning.
pub fn unflatten(headers: &[String], data: &[String]) -> ColumnMap {
    let mut columns = ColumnMap::new();
    if headers.is_empty() {
        return columns;
    }

    let rows: Vec<&[String]> = data.chunks_exact(headers.len()).collect();
    for (i, header) in headers.iter().enumerate() {
        let values = rows.iter().map(|row| row[i].clone()).collect();
        columns.insert(header.clone(), values);
    }

    columns
}
