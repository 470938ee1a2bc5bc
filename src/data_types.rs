// Data structures for the animated chart

pub mod config;
pub mod props;
pub mod record;

pub use config::{AnimationTimings, ChartConfig, Margins, Viewport};
pub use props::{ChartMode, ChartProps};
pub use record::Record;

use eyre::{eyre, Result};
use gpui::Hsla;

// Hex color helpers shared by the palette and host-supplied KPI colors
pub mod hex_color {
    use super::*;

    /// Parses `#rrggbb` or `rrggbb` into a color.
    pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(eyre!("expected 6 hex digits, got {:?}", hex));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| eyre!("invalid hex color {:?}: {}", hex, e))?;
        Ok(from_u32(value))
    }

    pub fn from_u32(value: u32) -> Hsla {
        gpui::rgb(value).into()
    }
}

/// Tick positions computed for both axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
