// src/export/load.rs

use crate::errors::AppResult;
use crate::export::ColumnFormat;
use crate::table::ColumnMap;
use indexmap::IndexMap;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a column file into a [`ColumnMap`].
///
/// - `.json`: an object whose values are arrays
/// - `.yaml` / `.yml`: a mapping whose values are sequences
/// - `.csv`: a header record followed by rows
///
/// A missing file is reported as an I/O error.
pub fn load_columns(path: &Path) -> AppResult<ColumnMap> {
    let format = ColumnFormat::from_path(path)?;
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    match format {
        ColumnFormat::Json => {
            let raw: IndexMap<String, Vec<Value>> = serde_json::from_reader(reader)?;
            Ok(stringify_columns(raw))
        }
        ColumnFormat::Yaml => {
            let raw: IndexMap<String, Vec<Value>> = serde_yaml::from_reader(reader)?;
            Ok(stringify_columns(raw))
        }
        ColumnFormat::Csv => read_csv(reader),
    }
}

fn stringify_columns(raw: IndexMap<String, Vec<Value>>) -> ColumnMap {
    raw.into_iter()
        .map(|(name, values)| (name, values.into_iter().map(canonical).collect()))
        .collect()
}

/// Strings verbatim, null as "", anything else by its JSON text.
fn canonical(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn read_csv<R: std::io::Read>(reader: R) -> AppResult<ColumnMap> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut columns: Vec<(String, Vec<String>)> = rdr
        .headers()?
        .iter()
        .map(|h| (h.to_string(), Vec::new()))
        .collect();

    for record in rdr.records() {
        let record = record?;
        for (slot, field) in columns.iter_mut().zip(record.iter()) {
            slot.1.push(field.to_string());
        }
    }

    Ok(columns.into_iter().collect())
}
