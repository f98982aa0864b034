//! Visual options consumed by the line assembler.

/// Border and separator toggles for a [`Table`](super::Table).
///
/// Defaults: outer borders on, row and column separators off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    borders: bool,
    row_sep: bool,
    col_sep: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            borders: true,
            row_sep: false,
            col_sep: false,
        }
    }
}

impl Style {
    pub fn new(borders: bool, row_sep: bool, col_sep: bool) -> Self {
        Self {
            borders,
            row_sep,
            col_sep,
        }
    }

    /// Replace every option at once.
    pub fn update(&mut self, borders: bool, row_sep: bool, col_sep: bool) {
        *self = Self::new(borders, row_sep, col_sep);
    }

    /// Draw a frame around the table.
    pub fn borders(&self) -> bool {
        self.borders
    }

    /// Draw a line after every data row.
    pub fn row_sep(&self) -> bool {
        self.row_sep
    }

    /// Draw a vertical rule between columns.
    pub fn col_sep(&self) -> bool {
        self.col_sep
    }
}
