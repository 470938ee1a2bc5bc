use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_formatter;

/// One day of sales, split by payment method.
///
/// `total` is pre-aggregated by the host and is the only value the chart
/// draws. The payment split is carried along untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "date_formatter::deserialize_record_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub cartao: f64,
    #[serde(default)]
    pub dinheiro: f64,
    #[serde(default)]
    pub pix: f64,
    pub total: f64,
}

impl Record {
    pub fn new(date: NaiveDate, total: f64) -> Self {
        Self {
            date,
            cartao: 0.0,
            dinheiro: 0.0,
            pix: 0.0,
            total,
        }
    }

    pub fn with_split(mut self, cartao: f64, dinheiro: f64, pix: f64) -> Self {
        self.cartao = cartao;
        self.dinheiro = dinheiro;
        self.pix = pix;
        self
    }
}
