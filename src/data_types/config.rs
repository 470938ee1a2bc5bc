use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::currency::CurrencyFormat;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

/// Logical canvas of the chart. Fixed for the lifetime of a component.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margins: Margins::default(),
        }
    }
}

impl Viewport {
    /// Y of the horizontal axis; bars and areas grow from here.
    pub fn baseline(&self) -> f32 {
        self.height - self.margins.bottom
    }

    pub fn x_range(&self) -> (f32, f32) {
        (self.margins.left, self.width - self.margins.right)
    }

    pub fn y_range(&self) -> (f32, f32) {
        (self.baseline(), self.margins.top)
    }
}

/// Durations and sizes of every entrance transition, in milliseconds and pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    pub axis_fade_ms: u64,
    pub path_reveal_ms: u64,
    pub point_stagger_ms: u64,
    pub point_grow_ms: u64,
    pub point_radius: f32,
    pub bar_stagger_ms: u64,
    pub bar_grow_ms: u64,
    pub bar_width: f32,
    pub line_width: f32,
    pub tooltip_fade_ms: u64,
    pub tooltip_box_opacity: f32,
    pub playback_interval_ms: u64,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            axis_fade_ms: 1000,
            path_reveal_ms: 2000,
            point_stagger_ms: 100,
            point_grow_ms: 500,
            point_radius: 5.0,
            bar_stagger_ms: 50,
            bar_grow_ms: 800,
            bar_width: 20.0,
            line_width: 3.0,
            tooltip_fade_ms: 200,
            tooltip_box_opacity: 0.9,
            playback_interval_ms: 500,
        }
    }
}

impl AnimationTimings {
    pub fn point_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.point_stagger_ms * index as u64)
    }

    pub fn bar_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.bar_stagger_ms * index as u64)
    }

    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    /// Extra room the host frame needs around the canvas (header, padding).
    pub frame_padding: f32,
    pub animation: AnimationTimings,
    pub currency: CurrencyFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frame_padding: 50.0,
            animation: AnimationTimings::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart config")
    }

    /// Height reported to the host after every redraw.
    pub fn frame_height(&self) -> f32 {
        self.viewport.height + self.frame_padding
    }
}
