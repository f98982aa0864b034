//! Table model: headers, flat row-major data and the derived layout state.
//!
//! The number of headers fixes the number of columns. Data is a single flat
//! list of cells; row `r` is `data[r * N .. r * N + N]`. A trailing partial
//! row is kept in storage but neither measured nor rendered until it fills up.

pub mod align;
pub mod columns;
pub mod filter;
pub mod render;
pub mod style;
pub mod widths;

pub use align::Alignment;
pub use columns::ColumnMap;
pub use filter::{ColumnFilter, TableView};
pub use style::Style;

use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ui::messages::warning;
use std::fmt;
use std::io::{self, Write};
use std::ops::Index;
use std::path::Path;

/// Outcome of a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// Number of lines written.
    Lines(usize),
    /// Nothing to draw (no columns, or every column hidden). A warning was emitted.
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    data: Vec<String>,
    column_max: Vec<usize>,
    /// Complete rows already folded into `column_max`.
    measured_rows: usize,
    alignment: Vec<Alignment>,
    style: Style,
}

impl Table {
    /// Build a table; `None` style means [`Style::default`].
    pub fn new<H, D>(headers: H, data: D, style: Option<Style>) -> Self
    where
        H: IntoIterator,
        H::Item: ToString,
        D: IntoIterator,
        D::Item: ToString,
    {
        let mut table = Self {
            data: stringify(data),
            style: style.unwrap_or_default(),
            ..Self::default()
        };
        table.set_headers(headers);
        table
    }

    /// Build a table from a column mapping; see [`Table::load_columns`].
    pub fn from_columns(columns: &ColumnMap, style: Option<Style>) -> Self {
        let (headers, data) = columns::flatten(columns);
        Self::new(headers, data, style)
    }

    /// Build a table from a column file (`.json`, `.yaml`/`.yml`, `.csv`).
    pub fn from_file(path: &Path, style: Option<Style>) -> AppResult<Self> {
        let columns = export::load_columns(path)?;
        Ok(Self::from_columns(&columns, style))
    }

    // ---------------------------
    // Headers and data
    // ---------------------------

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Replace the headers. Widths are recomputed from scratch and the
    /// alignment is fitted to the new column count.
    pub fn set_headers<H>(&mut self, headers: H)
    where
        H: IntoIterator,
        H::Item: ToString,
    {
        self.headers = stringify(headers);
        let columns = self.headers.len();

        if self.alignment.is_empty() {
            self.alignment = Alignment::defaults(columns);
        } else {
            Alignment::resize(&mut self.alignment, columns);
        }

        self.recompute_widths();
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Replace the cells, keeping the current column count.
    pub fn set_data<D>(&mut self, data: D)
    where
        D: IntoIterator,
        D::Item: ToString,
    {
        self.data = stringify(data);
        self.recompute_widths();
    }

    /// Append cells (any count) to the flat data.
    /// Only rows completed by the new cells are measured.
    pub fn add_data<D>(&mut self, data: D)
    where
        D: IntoIterator,
        D::Item: ToString,
    {
        self.data.extend(data.into_iter().map(|v| v.to_string()));
        self.measured_rows = widths::fold_rows(&mut self.column_max, &self.data, self.measured_rows);
    }

    /// Replace headers and data with the content of `columns`.
    pub fn load_columns(&mut self, columns: &ColumnMap) {
        let (headers, data) = columns::flatten(columns);
        self.data = data;
        self.set_headers(headers);
    }

    /// Replace headers and data with the content of a column file.
    /// The table is left untouched when reading or parsing fails.
    pub fn load_file(&mut self, path: &Path) -> AppResult<()> {
        let columns = export::load_columns(path)?;
        self.load_columns(&columns);
        Ok(())
    }

    /// Column-oriented copy of the complete rows, keyed by header.
    pub fn to_columns(&self) -> ColumnMap {
        columns::unflatten(&self.headers, &self.data)
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Complete rows only.
    pub fn num_rows(&self) -> usize {
        widths::complete_rows(self.data.len(), self.num_columns())
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        if index >= self.num_rows() {
            return None;
        }
        let n = self.num_columns();
        Some(&self.data[index * n..index * n + n])
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.row(row)?.get(col).map(String::as_str)
    }

    // ---------------------------
    // Layout state
    // ---------------------------

    pub fn column_widths(&self) -> &[usize] {
        &self.column_max
    }

    fn recompute_widths(&mut self) {
        self.column_max = widths::column_widths(&self.headers, &self.data);
        self.measured_rows = self.num_rows();
    }

    pub fn alignment(&self) -> Vec<Alignment> {
        self.alignment.clone()
    }

    /// Replace every marker; the list is fitted to the column count.
    pub fn set_alignments<I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = Alignment>,
    {
        let mut markers: Vec<Alignment> = markers.into_iter().collect();
        Alignment::resize(&mut markers, self.num_columns());
        self.alignment = markers;
    }

    /// Replace every marker from text (`left`, `r`, `center`, ...).
    /// A list with any unknown marker is rejected whole and nothing changes.
    pub fn parse_alignments<S: AsRef<str>>(&mut self, markers: &[S]) -> AppResult<()> {
        let parsed = markers
            .iter()
            .map(|m| m.as_ref().parse::<Alignment>())
            .collect::<AppResult<Vec<_>>>()?;
        self.set_alignments(parsed);
        Ok(())
    }

    /// Set the marker of one column.
    pub fn set_alignment(&mut self, index: usize, marker: impl AsRef<str>) -> AppResult<()> {
        let columns = self.num_columns();
        if index >= columns {
            return Err(AppError::ColumnOutOfRange { index, columns });
        }

        self.alignment[index] = marker.as_ref().parse()?;
        Ok(())
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    // ---------------------------
    // Rendering
    // ---------------------------

    /// Filtered copy of the table; the table itself is not modified.
    pub fn view(&self, filter: &ColumnFilter) -> TableView {
        TableView::build(
            &self.headers,
            &self.column_max,
            &self.alignment,
            &self.data,
            filter,
        )
    }

    /// Render to any sink.
    pub fn render_to<W: Write>(&self, out: &mut W, filter: &ColumnFilter) -> AppResult<Rendered> {
        if self.num_columns() == 0 {
            warning("Table has no columns: set the headers before printing it");
            return Ok(Rendered::Skipped);
        }

        let view = self.view(filter);
        if view.num_columns() == 0 {
            warning("Every column is hidden: nothing to print");
            return Ok(Rendered::Skipped);
        }

        let lines = render::layout(&view, &self.style);
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(Rendered::Lines(lines.len()))
    }

    /// Render to stdout.
    pub fn render(&self, filter: &ColumnFilter) -> AppResult<Rendered> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render_to(&mut lock, filter)
    }

    /// Rendered text, identical to what [`Table::render`] prints.
    /// Empty when there is nothing to draw.
    pub fn to_text(&self, filter: &ColumnFilter) -> String {
        let mut buf = Vec::new();
        match self.render_to(&mut buf, filter) {
            Ok(_) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl Index<usize> for Table {
    type Output = [String];

    /// Row access; panics past the last complete row.
    fn index(&self, index: usize) -> &Self::Output {
        match self.row(index) {
            Some(row) => row,
            None => panic!(
                "row index {index} out of range (table has {} rows)",
                self.num_rows()
            ),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&ColumnFilter::default()))
    }
}

fn stringify<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    values.into_iter().map(|v| v.to_string()).collect()
}
