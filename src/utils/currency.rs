use d3rs::format::{Locale, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

use super::{format_grouped, PT_BR};

/// Number conventions a [`CurrencyFormat`] can use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberLocale {
    /// `1.234,56`
    #[default]
    PtBr,
    /// `1,234.56`
    EnUs,
}

impl NumberLocale {
    pub fn locale(self) -> &'static Locale {
        match self {
            NumberLocale::PtBr => &PT_BR,
            NumberLocale::EnUs => &DEFAULT_LOCALE,
        }
    }
}

/// Localized money formatting. Defaults to Brazilian reais: `R$ 1.234,56`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub locale: NumberLocale,
    pub decimals: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            locale: NumberLocale::PtBr,
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{} -", self.symbol);
        }
        format!(
            "{} {}",
            self.symbol,
            format_grouped(self.locale.locale(), value, self.decimals)
        )
    }
}
