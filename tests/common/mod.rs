#![allow(dead_code)]

use chrono::NaiveDate;
use gpui_animated_chart::{AnimatedChart, ChartConfig, ChartMode, ChartProps, HeightLog, Record, Theme};
use std::time::Duration;

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// Records on consecutive January days with the given totals.
pub fn records(totals: &[f64]) -> Vec<Record> {
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| Record::new(day(i as u32 + 1), *total))
        .collect()
}

pub fn chart(totals: &[f64], mode: ChartMode) -> (AnimatedChart, HeightLog) {
    let log = HeightLog::new();
    let props = ChartProps::new(records(totals), mode, Theme::Dark);
    let chart = AnimatedChart::with_props(ChartConfig::default(), props, Box::new(log.clone()));
    (chart, log)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
