pub mod formatting;

pub use formatting::display_width;
