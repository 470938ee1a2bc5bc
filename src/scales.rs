//! Scale Mapper: domain values (dates, totals) to canvas pixels.

use chrono::NaiveDate;
use d3rs::scale::{LinearScale, Scale as D3Scale};
use d3rs::time::{Interval, TimeInterval, TimeScale};

use crate::data_types::{Record, Ticks, Viewport};
use crate::utils::date_formatter::{date_to_millis, millis_to_date};

/// Linear scale with a guard against zero-width domains.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    /// A zero-width domain is widened by half a unit each side, so its single
    /// value lands in the middle of the range.
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            inner,
            domain: (d_min, d_max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner
            .invert(pixel as f64)
            .filter(|v| v.is_finite())
            .unwrap_or(self.domain.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.inner.ticks(count)
    }
}

/// Horizontal and vertical mapping for one redraw.
#[derive(Clone)]
pub struct ScaleMapper {
    /// Milliseconds since the epoch to x.
    pub x: ChartScale,
    /// Total to y. Inverted: bigger totals sit higher.
    pub y: ChartScale,
}

impl ScaleMapper {
    /// Builds both scales from the records' extents. An empty slice gives
    /// degenerate `[0, 0]` domains; callers are expected to skip drawing.
    pub fn new(records: &[Record], viewport: &Viewport) -> Self {
        let (x_min, x_max) = date_extent(records)
            .map(|(lo, hi)| (date_to_millis(lo), date_to_millis(hi)))
            .unwrap_or((0.0, 0.0));
        let y_max = records
            .iter()
            .map(|r| r.total)
            .filter(|t| t.is_finite())
            .fold(0.0_f64, f64::max);

        Self {
            x: ChartScale::new_linear((x_min, x_max), viewport.x_range()),
            y: ChartScale::new_linear((0.0, y_max), viewport.y_range()),
        }
    }

    pub fn x_for_date(&self, date: NaiveDate) -> f32 {
        self.x.map(date_to_millis(date))
    }

    pub fn y_for_total(&self, total: f64) -> f32 {
        self.y.map(total)
    }

    pub fn date_at(&self, x: f32) -> Option<NaiveDate> {
        millis_to_date(self.x.invert(x))
    }

    /// Day-aligned ticks for the time axis and "nice" ticks for totals.
    pub fn ticks(&self, max_count: usize) -> Ticks {
        Ticks {
            x: self.date_ticks(max_count),
            y: self
                .y
                .ticks(max_count)
                .into_iter()
                .filter(|t| *t >= 0.0)
                .collect(),
        }
    }

    fn date_ticks(&self, max_count: usize) -> Vec<f64> {
        let (lo, hi) = self.x.domain();
        let time = TimeScale::new()
            .domain((lo / 1000.0).ceil() as i64, (hi / 1000.0).floor() as i64)
            .range(self.x.range().0 as f64, self.x.range().1 as f64);

        // records are daily, so only midnight ticks get a label
        let days: Vec<i64> = time
            .time_ticks(max_count)
            .into_iter()
            .filter(|t| TimeInterval::Day.floor(*t) == *t)
            .collect();
        let every = days.len().div_ceil(max_count.max(1)).max(1);
        days.into_iter()
            .step_by(every)
            .map(|secs| secs as f64 * 1000.0)
            .collect()
    }
}

pub fn date_extent(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
    let lo = records.iter().map(|r| r.date).min()?;
    let hi = records.iter().map(|r| r.date).max()?;
    Some((lo, hi))
}
