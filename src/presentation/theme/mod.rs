//! Colors and styles derived from the configured accent.

/// Conversions between ratatui colors and HSL.
pub mod adapter;
mod palette;

pub use palette::{Theme, parse_color};
