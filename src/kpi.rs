//! KPI cards: a responsive grid of headline figures with a staggered
//! spring entrance, driven by the same timeline as the chart.

use eyre::{Result, WrapErr};
use glam::Vec2;
use gpui::Hsla;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::animation::{Easing, Timeline, Transition, TransitionEnd};
use crate::data_types::hex_color::{from_u32, parse_hex_str};
use crate::scene::{ElementId, Property};
use crate::theme::Theme;

pub const MIN_COLUMN_WIDTH: f32 = 250.0;
pub const GRID_GAP: f32 = 20.0;
pub const GRID_PADDING: f32 = 20.0;
pub const CARD_HEIGHT: f32 = 190.0;

/// Time a spring transition is given to settle.
pub const SPRING_SETTLE: Duration = Duration::from_millis(1000);
const FADE: Duration = Duration::from_millis(300);
const STAGGER_MS: u64 = 100;
const ICON_DELAY_MS: u64 = 200;
const VALUE_DELAY_MS: u64 = 400;
const CHANGE_DELAY_MS: u64 = 600;

const HOVER: Duration = Duration::from_millis(200);
const HOVER_SCALE: f32 = 1.05;
const HOVER_TILT_DEG: f32 = 5.0;

/// One badge wiggle, then a rest before the next one.
pub const BADGE_CYCLE: Duration = Duration::from_secs(2);
pub const BADGE_REST: Duration = Duration::from_secs(3);
const BADGE_ROTATION: [f32; 4] = [0.0, 10.0, -10.0, 0.0];
const BADGE_PULSE: [f32; 3] = [1.0, 1.1, 1.0];

const RISE: u32 = 0x4caf50;
const FALL: u32 = 0xf44336;

/// One headline figure as sent by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub title: String,
    /// Already formatted by the host, e.g. `R$ 12.345`.
    pub value: String,
    /// Percentage change against the previous period.
    pub change: f64,
    pub icon: String,
    /// Accent color as `#rrggbb`.
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiProps {
    #[serde(default)]
    pub data: Vec<KpiData>,
    #[serde(default)]
    pub theme: Theme,
}

impl KpiProps {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid kpi props")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗️",
            Trend::Down => "↘️",
        }
    }

    pub fn color(self) -> Hsla {
        match self {
            Trend::Up => from_u32(RISE),
            Trend::Down => from_u32(FALL),
        }
    }
}

pub fn change_label(change: f64) -> String {
    format!("{:.1}% vs período anterior", change.abs())
}

/// Card background gradient, top-left to bottom-right.
pub fn card_gradient(theme: Theme) -> (Hsla, Hsla) {
    match theme {
        Theme::Dark => (from_u32(0x1e3c72), from_u32(0x2a5298)),
        Theme::Light => (from_u32(0x667eea), from_u32(0x764ba2)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Auto-fit grid: as many columns of at least [`MIN_COLUMN_WIDTH`] as fit
/// in `width`, sharing the leftover space equally.
pub fn grid_layout(count: usize, width: f32) -> Vec<CardRect> {
    let inner = (width - 2.0 * GRID_PADDING).max(MIN_COLUMN_WIDTH);
    let columns = (((inner + GRID_GAP) / (MIN_COLUMN_WIDTH + GRID_GAP)).floor() as usize).max(1);
    let card_width = (inner - GRID_GAP * (columns - 1) as f32) / columns as f32;

    (0..count)
        .map(|i| {
            let (row, col) = (i / columns, i % columns);
            CardRect {
                origin: Vec2::new(
                    GRID_PADDING + col as f32 * (card_width + GRID_GAP),
                    GRID_PADDING + row as f32 * (CARD_HEIGHT + GRID_GAP),
                ),
                size: Vec2::new(card_width, CARD_HEIGHT),
            }
        })
        .collect()
}

/// Height of the grid holding `count` cards at `width`.
pub fn grid_height(count: usize, width: f32) -> f32 {
    grid_layout(count, width)
        .last()
        .map_or(2.0 * GRID_PADDING, |r| r.origin.y + r.size.y + GRID_PADDING)
}

// element ids per card: frame, icon, value, change row, badge
fn ids(index: usize) -> [ElementId; 5] {
    let base = index as u32 * 5;
    [
        ElementId(base),
        ElementId(base + 1),
        ElementId(base + 2),
        ElementId(base + 3),
        ElementId(base + 4),
    ]
}

/// A card with every animated property resolved at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct KpiCardFrame {
    pub index: usize,
    pub rect: CardRect,
    pub title: String,
    pub value: String,
    pub icon: String,
    pub accent: Hsla,
    pub trend: Trend,
    pub change_text: String,
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
    /// Tilt around the vertical axis while hovered, in degrees.
    pub rotate_y: f32,
    pub hovered: bool,
    pub icon_scale: f32,
    pub value_opacity: f32,
    pub value_offset_x: f32,
    pub change_opacity: f32,
    pub badge_rotate: f32,
    pub badge_scale: f32,
}

/// Animated KPI grid.
pub struct KpiBoard {
    props: KpiProps,
    width: f32,
    timeline: Timeline,
    hovered: Option<usize>,
}

impl KpiBoard {
    pub fn new(props: KpiProps, width: f32) -> Self {
        let mut board = Self {
            props,
            width,
            timeline: Timeline::new(),
            hovered: None,
        };
        board.schedule_entrance();
        board
    }

    pub fn props(&self) -> &KpiProps {
        &self.props
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Replaces the cards and replays the entrance.
    pub fn set_props(&mut self, props: KpiProps) {
        if props == self.props {
            return;
        }
        self.props = props;
        self.schedule_entrance();
    }

    /// Relayouts without replaying the entrance.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn height(&self) -> f32 {
        grid_height(self.props.data.len(), self.width)
    }

    pub fn advance(&mut self, dt: Duration) -> Vec<TransitionEnd> {
        self.timeline.advance(dt)
    }

    /// True once the entrance and any hover transition have ended.
    pub fn is_settled(&self) -> bool {
        self.timeline.is_idle()
    }

    /// Whether frames are still needed. Badges loop for as long as there
    /// are cards.
    pub fn is_animating(&self) -> bool {
        !self.is_settled() || self.timeline.loop_count() > 0
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered (`true`) or left a card. Grows and tilts the card,
    /// or eases it back, from wherever it currently is.
    pub fn hover(&mut self, index: usize, hovered: bool) -> bool {
        if index >= self.props.data.len() {
            return false;
        }
        let was = self.hovered == Some(index);
        if was == hovered {
            return false;
        }
        if hovered {
            if let Some(previous) = self.hovered.replace(index) {
                self.ease_hover(previous, 1.0, 0.0);
            }
            self.ease_hover(index, HOVER_SCALE, HOVER_TILT_DEG);
        } else {
            self.hovered = None;
            self.ease_hover(index, 1.0, 0.0);
        }
        tracing::trace!(card = index, hovered, "kpi hover");
        true
    }

    fn ease_hover(&mut self, index: usize, scale: f32, tilt: f32) {
        let [card, ..] = ids(index);
        let scale_now = self.timeline.sample(card, Property::Scale).unwrap_or(1.0);
        let tilt_now = self.timeline.sample(card, Property::RotateY).unwrap_or(0.0);
        self.timeline
            .schedule(Transition::new(card, Property::Scale, scale_now, scale).duration(HOVER));
        self.timeline
            .schedule(Transition::new(card, Property::RotateY, tilt_now, tilt).duration(HOVER));
    }

    pub fn cards(&self) -> Vec<KpiCardFrame> {
        let layout = grid_layout(self.props.data.len(), self.width);
        let fallback = card_gradient(self.props.theme).1;
        self.props
            .data
            .iter()
            .zip(layout)
            .enumerate()
            .map(|(index, (kpi, rect))| {
                let [card, icon, value, change, badge] = ids(index);
                let sample = |id, property, rest| self.timeline.sample(id, property).unwrap_or(rest);
                let trend = Trend::of(kpi.change);
                KpiCardFrame {
                    index,
                    rect,
                    title: kpi.title.clone(),
                    value: kpi.value.clone(),
                    icon: kpi.icon.clone(),
                    accent: parse_hex_str(&kpi.color).unwrap_or(fallback),
                    trend,
                    change_text: change_label(kpi.change),
                    opacity: sample(card, Property::Opacity, 1.0),
                    offset_y: sample(card, Property::TranslateY, 0.0),
                    scale: sample(card, Property::Scale, 1.0),
                    rotate_y: sample(card, Property::RotateY, 0.0),
                    hovered: self.hovered == Some(index),
                    icon_scale: sample(icon, Property::Scale, 1.0),
                    value_opacity: sample(value, Property::Opacity, 1.0),
                    value_offset_x: sample(value, Property::TranslateX, 0.0),
                    change_opacity: sample(change, Property::Opacity, 1.0),
                    badge_rotate: sample(badge, Property::Rotate, 0.0),
                    badge_scale: sample(badge, Property::Scale, 1.0),
                }
            })
            .collect()
    }

    fn schedule_entrance(&mut self) {
        self.timeline.begin_generation();
        self.hovered = None;
        for (index, kpi) in self.props.data.iter().enumerate() {
            if let Err(err) = parse_hex_str(&kpi.color) {
                tracing::warn!(card = index, error = %err, "kpi accent color ignored");
            }
            let stagger = STAGGER_MS * index as u64;
            let at = |ms: u64| Duration::from_millis(ms + stagger);
            let [card, icon, value, change, badge] = ids(index);
            let spring = |t: Transition| t.duration(SPRING_SETTLE).ease(Easing::spring());

            for transition in [
                spring(Transition::new(card, Property::Opacity, 0.0, 1.0)).delay(at(0)),
                spring(Transition::new(card, Property::TranslateY, 20.0, 0.0)).delay(at(0)),
                spring(Transition::new(card, Property::Scale, 0.9, 1.0)).delay(at(0)),
                spring(Transition::new(icon, Property::Scale, 0.0, 1.0)).delay(at(ICON_DELAY_MS)),
                Transition::new(value, Property::Opacity, 0.0, 1.0)
                    .duration(FADE)
                    .delay(at(VALUE_DELAY_MS)),
                Transition::new(value, Property::TranslateX, -20.0, 0.0)
                    .duration(FADE)
                    .delay(at(VALUE_DELAY_MS)),
                Transition::new(change, Property::Opacity, 0.0, 1.0)
                    .duration(FADE)
                    .delay(at(CHANGE_DELAY_MS)),
                Transition::keyframes(badge, Property::Rotate, &BADGE_ROTATION)
                    .duration(BADGE_CYCLE)
                    .repeat_forever(BADGE_REST),
                Transition::keyframes(badge, Property::Scale, &BADGE_PULSE)
                    .duration(BADGE_CYCLE)
                    .repeat_forever(BADGE_REST),
            ] {
                self.timeline.schedule(transition);
            }
        }
        tracing::debug!(cards = self.props.data.len(), "kpi entrance scheduled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fits_columns_to_width() {
        assert_eq!(grid_layout(3, 200.0).len(), 3);
        let wide = grid_layout(4, 1140.0);
        // 1100 inner -> 4 columns of 260
        assert_eq!(wide[3].origin.y, GRID_PADDING);
        assert!((wide[0].size.x - 260.0).abs() < 1e-3);
        let narrow = grid_layout(2, 500.0);
        assert_eq!(narrow[1].origin.x, GRID_PADDING);
        assert!(narrow[1].origin.y > narrow[0].origin.y);
    }

    #[test]
    fn trend_follows_sign() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(-2.5).arrow(), "↘️");
        assert_eq!(change_label(-12.345), "12.3% vs período anterior");
    }
}
