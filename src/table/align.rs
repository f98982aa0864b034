//! Per-column alignment markers.

use crate::errors::AppError;
use crate::utils::formatting::{pad_center, pad_left, pad_right};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Left for the label column (index 0), right for every value column.
    pub fn defaults(columns: usize) -> Vec<Alignment> {
        (0..columns)
            .map(|i| if i == 0 { Alignment::Left } else { Alignment::Right })
            .collect()
    }

    /// Fit `markers` to `columns` entries: truncate, or pad with `Right`.
    pub fn resize(markers: &mut Vec<Alignment>, columns: usize) {
        markers.resize(columns, Alignment::Right);
    }

    /// Pad `value` to `width` terminal columns.
    pub fn apply(self, value: &str, width: usize) -> String {
        match self {
            Alignment::Left => pad_right(value, width),
            Alignment::Right => pad_left(value, width),
            Alignment::Center => pad_center(value, width),
        }
    }
}

impl FromStr for Alignment {
    type Err = AppError;

    /// Accepts `left`/`l`, `right`/`r`, `center`/`c` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Alignment::Left),
            "right" | "r" => Ok(Alignment::Right),
            "center" | "c" => Ok(Alignment::Center),
            _ => Err(AppError::InvalidAlignment(s.to_string())),
        }
    }
}
