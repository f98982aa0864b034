// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::table::ColumnMap;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: one array per column, in header order.
pub(crate) fn export_json(columns: &ColumnMap, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(columns)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export YAML: a mapping of column name to sequence.
pub(crate) fn export_yaml(columns: &ColumnMap, path: &Path) -> AppResult<()> {
    info(format!("Exporting to YAML: {}", path.display()));

    let yaml_data = serde_yaml::to_string(columns)?;

    let mut file = File::create(path)?;
    file.write_all(yaml_data.as_bytes())?;

    notify_export_success("YAML", path);
    Ok(())
}

/// Export CSV: header record, then rows. Short columns are padded with "".
pub(crate) fn export_csv(columns: &ColumnMap, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(columns.keys())?;

    let rows = columns.values().map(Vec::len).max().unwrap_or(0);
    for r in 0..rows {
        let record = columns
            .values()
            .map(|values| values.get(r).map(String::as_str).unwrap_or(""));
        wtr.write_record(record)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
