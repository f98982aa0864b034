//! Column width derivation.
//!
//! A cell only counts once its row is complete: a trailing partial row never
//! widens a column, exactly as it never gets rendered.

use crate::utils::display_width;

/// Number of complete rows in `len` flat cells.
pub fn complete_rows(len: usize, columns: usize) -> usize {
    if columns == 0 { 0 } else { len / columns }
}

/// Full recompute over headers and every complete row.
pub fn column_widths(headers: &[String], data: &[String]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    fold_rows(&mut widths, data, 0);
    widths
}

/// Widen `widths` with the complete rows of `data` starting at `from_row`.
///
/// Returns the number of complete rows now accounted for, which is the
/// `from_row` to pass on the next call.
pub fn fold_rows(widths: &mut [usize], data: &[String], from_row: usize) -> usize {
    let columns = widths.len();
    let rows = complete_rows(data.len(), columns);
    if rows <= from_row {
        return rows;
    }

    let start = from_row * columns;
    for (offset, cell) in data[start..rows * columns].iter().enumerate() {
        let col = (start + offset) % columns;
        widths[col] = widths[col].max(display_width(cell));
    }

    rows
}
