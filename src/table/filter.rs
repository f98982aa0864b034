//! Column visibility filtering.
//!
//! A render call never mutates the table: the filter produces a [`TableView`]
//! holding its own copy of the visible headers, widths, alignment and rows.

use super::align::Alignment;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

/// Columns to include in (`show`) or drop from (`hide`) a render call.
///
/// A non-empty `show` list wins: `hide` is then ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    pub show: Vec<usize>,
    pub hide: Vec<usize>,
}

impl ColumnFilter {
    pub fn show(columns: impl IntoIterator<Item = usize>) -> Self {
        Self {
            show: columns.into_iter().collect(),
            hide: Vec::new(),
        }
    }

    pub fn hide(columns: impl IntoIterator<Item = usize>) -> Self {
        Self {
            show: Vec::new(),
            hide: columns.into_iter().collect(),
        }
    }

    /// One entry per column, `true` when the column is rendered.
    /// Out-of-range indices are ignored.
    pub fn mask(&self, columns: usize) -> Vec<bool> {
        if !self.show.is_empty() {
            let mut mask = vec![false; columns];
            for &i in &self.show {
                if let Some(slot) = mask.get_mut(i) {
                    *slot = true;
                }
            }
            mask
        } else {
            let mut mask = vec![true; columns];
            for &i in &self.hide {
                if let Some(slot) = mask.get_mut(i) {
                    *slot = false;
                }
            }
            mask
        }
    }
}

/// Keep the entries of `items` whose mask slot is `true`.
pub fn apply_mask<T: Clone>(items: &[T], mask: &[bool]) -> AppResult<Vec<T>> {
    if items.len() != mask.len() {
        return Err(AppError::MaskMismatch {
            expected: mask.len(),
            found: items.len(),
        });
    }

    Ok(items
        .iter()
        .zip(mask)
        .filter(|(_, visible)| **visible)
        .map(|(item, _)| item.clone())
        .collect())
}

/// [`apply_mask`], falling back to the unfiltered list on a length mismatch.
pub(crate) fn apply_mask_or_keep<T: Clone>(items: &[T], mask: &[bool]) -> Vec<T> {
    apply_mask(items, mask).unwrap_or_else(|e| {
        warning(format!("{e}; rendering the list unfiltered"));
        items.to_vec()
    })
}

/// Filtered, render-ready copy of a table's layout and complete rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub widths: Vec<usize>,
    pub alignment: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl TableView {
    pub(crate) fn build(
        headers: &[String],
        widths: &[usize],
        alignment: &[Alignment],
        data: &[String],
        filter: &ColumnFilter,
    ) -> Self {
        let columns = headers.len();
        let mask = filter.mask(columns);

        let rows = if columns == 0 {
            Vec::new()
        } else {
            data.chunks_exact(columns)
                .map(|row| apply_mask_or_keep(row, &mask))
                .collect()
        };

        Self {
            headers: apply_mask_or_keep(headers, &mask),
            widths: apply_mask_or_keep(widths, &mask),
            alignment: apply_mask_or_keep(alignment, &mask),
            rows,
        }
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.row(row)?.get(col).map(String::as_str)
    }
}
