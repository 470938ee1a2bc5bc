pub mod currency;
pub mod date_formatter;

use d3rs::format::{format_locale, Locale, DEFAULT_LOCALE};

/// Brazilian Portuguese number locale: `1.234,56`.
pub const PT_BR: Locale = Locale::new(",", ".", Some("R$"), None);

/// Formats `value` in `locale` with thousands grouping and `decimals`
/// fraction digits. A value that rounds to zero never carries a minus sign.
pub fn format_grouped(locale: &Locale, value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let value = if (value * scale).round() == 0.0 { 0.0 } else { value };
    format_locale(locale, &format!(",.{}f", decimals))(value)
}

/// Formats a numeric axis tick with `,` grouping and enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.abs() > 0.0 && step.is_finite() {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format_grouped(&DEFAULT_LOCALE, value, decimals)
}

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for gpui::Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}
