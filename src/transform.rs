//! Transform helper for coordinate projection

use glam::Vec2;

use crate::data_types::{Record, Viewport};
use crate::scales::ScaleMapper;

#[derive(Clone)]
pub struct PlotTransform {
    pub scales: ScaleMapper,
    pub viewport: Viewport,
}

impl PlotTransform {
    pub fn new(records: &[Record], viewport: Viewport) -> Self {
        Self {
            scales: ScaleMapper::new(records, &viewport),
            viewport,
        }
    }

    pub fn record_to_screen(&self, record: &Record) -> Vec2 {
        Vec2::new(
            self.scales.x_for_date(record.date),
            self.scales.y_for_total(record.total),
        )
    }

    pub fn screen_points(&self, records: &[Record]) -> Vec<Vec2> {
        records.iter().map(|r| self.record_to_screen(r)).collect()
    }

    pub fn baseline(&self) -> f32 {
        self.viewport.baseline()
    }
}
