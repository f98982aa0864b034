//! Line assembly.
//!
//! Layout of a bordered, two column table:
//!
//! ```text
//! |__________________|
//! |   Name   Count   |   <- header
//! |------------------|   <- '=' when row separators are on
//! |   foo       12   |
//! |__________________|
//! ```

use super::filter::TableView;
use super::style::Style;

/// Spaces around every cell and border.
pub const PADDING: usize = 3;

const BAR: &str = "|";

/// Render `view` to lines. `view` must have at least one column.
pub fn layout(view: &TableView, style: &Style) -> Vec<String> {
    let frame = Frame::new(view, style);
    let mut lines = Vec::with_capacity(view.num_rows() * 2 + 4);

    lines.push(frame.outer());
    lines.push(frame.content(&view.headers));
    lines.push(frame.rule(if style.row_sep() { '=' } else { '-' }));

    for row in view.rows() {
        lines.push(frame.content(row));
        if style.row_sep() {
            lines.push(frame.rule('-'));
        }
    }

    lines.push(frame.outer());
    lines
}

struct Frame<'a> {
    view: &'a TableView,
    borders: bool,
    pad: String,
    gap: String,
    inner: usize,
}

impl<'a> Frame<'a> {
    fn new(view: &'a TableView, style: &Style) -> Self {
        let pad = " ".repeat(PADDING);
        let gap = if style.col_sep() {
            let side = PADDING / 2;
            format!(
                "{}{}{}",
                " ".repeat(side),
                BAR,
                " ".repeat(PADDING - side - BAR.len())
            )
        } else {
            pad.clone()
        };
        let inner = view.widths.iter().sum::<usize>() + (view.num_columns() + 1) * PADDING;

        Self {
            view,
            borders: style.borders(),
            pad,
            gap,
            inner,
        }
    }

    fn edge(&self) -> &'static str {
        if self.borders { BAR } else { "" }
    }

    /// Top and bottom line: underscores between bars, or blank without borders.
    fn outer(&self) -> String {
        if self.borders {
            self.rule('_')
        } else {
            String::new()
        }
    }

    fn rule(&self, fill: char) -> String {
        let edge = self.edge();
        format!("{edge}{}{edge}", fill.to_string().repeat(self.inner))
    }

    fn content(&self, cells: &[String]) -> String {
        let aligned: Vec<String> = cells
            .iter()
            .zip(&self.view.widths)
            .zip(&self.view.alignment)
            .map(|((cell, &width), align)| align.apply(cell, width))
            .collect();

        // a single column has no gap to place: edge, pad, cell, pad, edge
        let body = match aligned.as_slice() {
            [only] => only.clone(),
            many => many.join(self.gap.as_str()),
        };

        let edge = self.edge();
        format!("{edge}{pad}{body}{pad}{edge}", pad = self.pad)
    }
}
