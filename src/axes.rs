//! Bottom (time) and left (total) axes with fading labels.

use glam::Vec2;

use crate::animation::{Timeline, Transition};
use crate::scene::{Element, ElementKind, Property, Scene, TextAlign};
use crate::theme::Palette;
use crate::transform::PlotTransform;
use crate::utils::{date_formatter, format_tick};

/// Ticks requested per axis.
pub const TICK_COUNT: usize = 10;
/// Length of a tick mark, outward from the axis line.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark's end and its label.
pub const LABEL_PADDING: f32 = 3.0;

/// Draws both axes and schedules the label fade-in.
pub fn draw_axes(
    transform: &PlotTransform,
    palette: &Palette,
    fade_ms: u64,
    scene: &mut Scene,
    timeline: &mut Timeline,
) {
    let viewport = &transform.viewport;
    let baseline = viewport.baseline();
    let (x0, x1) = viewport.x_range();
    let ticks = transform.scales.ticks(TICK_COUNT);

    let mut labels = Vec::new();

    // bottom axis
    push_line(scene, palette, Vec2::new(x0, baseline), Vec2::new(x1, baseline), false);
    for tick in &ticks.x {
        let x = transform.scales.x.map(*tick);
        push_line(
            scene,
            palette,
            Vec2::new(x, baseline),
            Vec2::new(x, baseline + TICK_SIZE),
            true,
        );
        let text = date_formatter::millis_to_date(*tick)
            .map(date_formatter::format_axis_date)
            .unwrap_or_default();
        labels.push((
            Vec2::new(x, baseline + TICK_SIZE + LABEL_PADDING),
            text,
            TextAlign::Top,
        ));
    }

    // left axis
    let (y_bottom, y_top) = viewport.y_range();
    let left = viewport.margins.left;
    push_line(scene, palette, Vec2::new(left, y_bottom), Vec2::new(left, y_top), false);
    let step = match ticks.y.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    for tick in &ticks.y {
        let y = transform.scales.y.map(*tick);
        push_line(
            scene,
            palette,
            Vec2::new(left, y),
            Vec2::new(left - TICK_SIZE, y),
            true,
        );
        labels.push((
            Vec2::new(left - TICK_SIZE - LABEL_PADDING, y),
            format_tick(*tick, step),
            TextAlign::Left,
        ));
    }

    for (anchor, text, align) in labels {
        let id = scene.allocate_id();
        scene.push(
            Element::new(id, ElementKind::AxisLabel { anchor, text, align })
                .fill(palette.text)
                .attr(Property::Opacity, 0.0),
        );
        timeline.schedule(Transition::new(id, Property::Opacity, 0.0, 1.0).duration_ms(fade_ms));
    }
}

fn push_line(scene: &mut Scene, palette: &Palette, from: Vec2, to: Vec2, tick: bool) {
    let id = scene.allocate_id();
    let kind = if tick {
        ElementKind::AxisTick { from, to }
    } else {
        ElementKind::AxisLine { from, to }
    };
    scene.push(Element::new(id, kind).stroke(palette.text));
}
