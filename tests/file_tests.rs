mod common;
use common::{SAMPLE_JSON, abc_table, temp_file, temp_path};
use std::fs;
use tablat::errors::AppError;
use tablat::export::{ColumnFormat, load_columns, write_columns};
use tablat::{ColumnFilter, Table};

#[test]
fn test_load_json_keeps_order_and_stringifies() {
    let path = temp_file("load_json", "json", SAMPLE_JSON);

    let columns = load_columns(&path).expect("load json");
    assert_eq!(columns.keys().collect::<Vec<_>>(), vec!["name", "size", "ok"]);
    assert_eq!(columns["size"], vec!["1", "22", "333"]);
    assert_eq!(columns["ok"], vec!["true", "false", ""]);
}

#[test]
fn test_load_yaml() {
    let yaml = "city:\n  - Rome\n  - Oslo\npopulation:\n  - 2873000\n  - 709000\n";
    let path = temp_file("load_yaml", "yml", yaml);

    let table = Table::from_file(&path, None).expect("load yaml");
    assert_eq!(table.headers(), &["city", "population"]);
    assert_eq!(table[1], ["Oslo", "709000"]);
    assert_eq!(table.column_widths(), &[4, 10]);
}

#[test]
fn test_load_csv() {
    let path = temp_file("load_csv", "csv", "name,size\nalpha,1\nbeta,22\n");

    let table = Table::from_file(&path, None).expect("load csv");
    assert_eq!(table.headers(), &["name", "size"]);
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.cell(1, 1), Some("22"));
}

#[test]
fn test_ragged_json_columns_are_padded() {
    let path = temp_file("ragged_json", "json", r#"{"a": [1, 2, 3], "b": ["x"]}"#);

    let table = Table::from_file(&path, None).expect("load json");
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table[2], ["3", ""]);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = temp_path("does_not_exist", "json");

    let err = Table::from_file(&path, None).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_failed_load_leaves_table_untouched() {
    let mut table = abc_table();
    let before = table.to_text(&ColumnFilter::default());

    let missing = temp_path("load_file_missing", "yaml");
    assert!(table.load_file(&missing).is_err());

    let broken = temp_file("load_file_broken", "json", r#"{"a": 1}"#);
    assert!(matches!(table.load_file(&broken), Err(AppError::Json(_))));

    assert_eq!(table.to_text(&ColumnFilter::default()), before);
}

#[test]
fn test_load_file_replaces_content() {
    let mut table = abc_table();
    let path = temp_file("load_file_replace", "json", SAMPLE_JSON);

    table.load_file(&path).expect("load json");
    assert_eq!(table.headers(), &["name", "size", "ok"]);
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.column_widths(), &[5, 4, 5]);
}

#[test]
fn test_unsupported_extension() {
    let path = temp_file("unsupported", "txt", "a,b\n");
    let err = load_columns(&path).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat(_)));
}

#[test]
fn test_format_from_path() {
    use std::path::Path;
    assert_eq!(
        ColumnFormat::from_path(Path::new("a/b.JSON")).unwrap(),
        ColumnFormat::Json
    );
    assert_eq!(
        ColumnFormat::from_path(Path::new("t.yml")).unwrap(),
        ColumnFormat::Yaml
    );
    assert_eq!(
        ColumnFormat::from_path(Path::new("t.csv")).unwrap(),
        ColumnFormat::Csv
    );
    assert!(ColumnFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn test_output_format_resolution() {
    use std::path::Path;
    let csv = Path::new("out.csv");
    let other = Path::new("out.txt");

    assert_eq!(
        ColumnFormat::for_output(csv, None, ColumnFormat::Json).unwrap(),
        ColumnFormat::Csv
    );
    assert_eq!(
        ColumnFormat::for_output(csv, Some(ColumnFormat::Csv), ColumnFormat::Json).unwrap(),
        ColumnFormat::Csv
    );
    assert!(matches!(
        ColumnFormat::for_output(csv, Some(ColumnFormat::Yaml), ColumnFormat::Json),
        Err(AppError::FormatMismatch { .. })
    ));
    assert_eq!(
        ColumnFormat::for_output(other, Some(ColumnFormat::Yaml), ColumnFormat::Json).unwrap(),
        ColumnFormat::Yaml
    );
    assert_eq!(
        ColumnFormat::for_output(other, None, ColumnFormat::Json).unwrap(),
        ColumnFormat::Json
    );
}

#[test]
fn test_csv_error_message_is_not_doubled() {
    let path = temp_file("csv_ragged_rows", "csv", "a,b\n1,2\n3\n");
    let err = load_columns(&path).unwrap_err();
    assert!(matches!(err, AppError::Csv(_)));
    assert_eq!(err.to_string().matches("CSV error").count(), 1);
}

#[test]
fn test_write_csv_pads_short_columns() {
    let table = Table::new(["k", "v"], ["a", "1", "b", "2"], None);
    let mut columns = table.to_columns();
    columns.insert("extra".into(), vec!["only".into()]);

    let out = temp_path("write_csv", "csv");
    write_columns(&out, &columns, ColumnFormat::Csv).expect("write csv");

    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content, "k,v,extra\na,1,only\nb,2,\n");
}

#[test]
fn test_written_files_load_back() {
    let table = abc_table();
    let columns = table.to_columns();

    for (name, format) in [("yaml", ColumnFormat::Yaml), ("json", ColumnFormat::Json)] {
        let out = temp_path(&format!("write_{name}"), name);
        write_columns(&out, &columns, format).expect("write");

        let reloaded = Table::from_file(&out, None).expect("reload");
        assert_eq!(reloaded.headers(), table.headers());
        assert_eq!(reloaded.data(), table.data());
    }
}
