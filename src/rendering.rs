// Painting of sampled frames and KPI cards with GPUI primitives

use glam::Vec2;
use gpui::prelude::*;
use gpui::{
    div, fill, linear_color_stop, linear_gradient, px, AnyElement, Bounds, Corners, Div, Edges,
    Hsla, PathBuilder, Pixels, Point, Size, Stateful, Window,
};
use kurbo::BezPath;

use crate::data_types::Viewport;
use crate::geometry::{to_vec2, visible_prefix, PathEl};
use crate::kpi::{card_gradient, KpiCardFrame};
use crate::scene::{Element, ElementKind, Frame, TextAlign};
use crate::theme::Theme;
use crate::utils::PixelsExt;

const AXIS_FONT_SIZE: f32 = 11.0;
const LABEL_BOX_WIDTH: f32 = 80.0;

/// Maps viewport coordinates onto the canvas bounds.
#[derive(Clone, Copy, Debug)]
pub struct FrameSpace {
    origin: Vec2,
    scale: Vec2,
}

impl FrameSpace {
    pub fn new(bounds: Bounds<Pixels>, viewport: &Viewport) -> Self {
        let width = bounds.size.width.as_f32();
        let height = bounds.size.height.as_f32();
        Self {
            origin: Vec2::new(bounds.origin.x.as_f32(), bounds.origin.y.as_f32()),
            scale: Vec2::new(
                width / viewport.width.max(1.0),
                height / viewport.height.max(1.0),
            ),
        }
    }

    /// Unscaled space for elements positioned relative to their parent.
    pub fn local(viewport: &Viewport, size: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: size / Vec2::new(viewport.width.max(1.0), viewport.height.max(1.0)),
        }
    }

    pub fn to_screen(&self, v: Vec2) -> Vec2 {
        self.origin + v * self.scale
    }

    pub fn point(&self, v: Vec2) -> Point<Pixels> {
        let p = self.to_screen(v);
        Point::new(px(p.x), px(p.y))
    }

    pub fn bounds(&self, origin: Vec2, size: Vec2) -> Bounds<Pixels> {
        let size = size * self.scale;
        Bounds::new(self.point(origin), Size::new(px(size.x), px(size.y)))
    }
}

/// Paints every non-text element of `frame`. Text goes through
/// [`label_elements`] so it can use the text system.
pub fn paint_frame(window: &mut Window, bounds: Bounds<Pixels>, frame: &Frame, viewport: &Viewport) {
    let space = FrameSpace::new(bounds, viewport);
    window.paint_quad(fill(bounds, frame.background));

    for element in &frame.elements {
        paint_element(window, &space, element);
    }
}

fn paint_element(window: &mut Window, space: &FrameSpace, element: &Element) {
    let opacity = element.attrs.opacity;
    match &element.kind {
        ElementKind::AxisLine { from, to } | ElementKind::AxisTick { from, to } => {
            if let Some(color) = element.stroke {
                stroke_polyline(window, space, &[*from, *to], 1.0, color.opacity(opacity));
            }
        }
        ElementKind::AreaPath { path, gradient, .. } => {
            let mut builder = PathBuilder::fill();
            trace_path(&mut builder, space, path);
            // 0 degrees runs bottom to top over the path bounds
            let background = linear_gradient(
                0.0,
                linear_color_stop(gradient.color.opacity(gradient.bottom_opacity * opacity), 0.0),
                linear_color_stop(gradient.color.opacity(gradient.top_opacity * opacity), 1.0),
            );
            if let Ok(path) = builder.build() {
                window.paint_path(path, background);
            }
        }
        ElementKind::LinePath { path, width, .. } => {
            let (Some(color), Some(visible)) = (element.stroke, element.visible_length()) else {
                return;
            };
            let visible = visible_prefix(path, visible);
            if visible.is_empty() {
                return;
            }
            let mut builder = PathBuilder::stroke(px(*width));
            trace_path(&mut builder, space, &visible);
            if let Ok(path) = builder.build() {
                window.paint_path(path, color.opacity(opacity));
            }
        }
        ElementKind::Point { center, .. } => {
            let radius = element.attrs.radius;
            if radius <= 0.0 {
                return;
            }
            if let Some(color) = element.fill {
                let r = Vec2::splat(radius);
                let bounds = space.bounds(*center - r, r * 2.0);
                window.paint_quad(
                    fill(bounds, color.opacity(opacity)).corner_radii(Corners::all(px(radius))),
                );
            }
        }
        ElementKind::Bar { x, width, .. } => {
            let height = element.attrs.height;
            if height <= 0.0 {
                return;
            }
            if let Some(color) = element.fill {
                let bounds = space.bounds(
                    Vec2::new(*x, element.attrs.y),
                    Vec2::new(*width, height),
                );
                window.paint_quad(fill(bounds, color.opacity(opacity)));
            }
        }
        ElementKind::TooltipBox {
            anchor,
            offset,
            size,
            corner_radius,
        } => {
            let background = element.fill.unwrap_or_else(gpui::black);
            let border = element.stroke.unwrap_or(background);
            let bounds = space.bounds(*anchor + *offset, *size);
            window.paint_quad(
                fill(bounds, background.opacity(opacity))
                    .corner_radii(Corners::all(px(*corner_radius)))
                    .border_widths(Edges::all(px(1.0)))
                    .border_color(border.opacity(opacity)),
            );
        }
        ElementKind::AxisLabel { .. } | ElementKind::TooltipText { .. } => {}
    }
}

fn trace_path(builder: &mut PathBuilder, space: &FrameSpace, path: &BezPath) {
    let at = |p: kurbo::Point| space.point(to_vec2(p));
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(at(p)),
            PathEl::LineTo(p) => builder.line_to(at(p)),
            PathEl::QuadTo(c, p) => builder.curve_to(at(p), at(c)),
            PathEl::CurveTo(a, b, p) => builder.cubic_bezier_to(at(p), at(a), at(b)),
            PathEl::ClosePath => builder.close(),
        }
    }
}

fn stroke_polyline(window: &mut Window, space: &FrameSpace, points: &[Vec2], width: f32, color: Hsla) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(space.point(*first));
    for p in rest {
        builder.line_to(space.point(*p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Absolutely positioned text for axis labels and the tooltip.
pub fn label_elements(frame: &Frame, space: &FrameSpace) -> Vec<AnyElement> {
    let half = LABEL_BOX_WIDTH / 2.0;
    let mut elements = Vec::new();

    for element in &frame.elements {
        let color = element.fill.unwrap_or_else(gpui::white).opacity(element.attrs.opacity);
        match &element.kind {
            ElementKind::AxisLabel {
                anchor,
                text,
                align,
            } => {
                let p = space.to_screen(*anchor);
                let label = div()
                    .absolute()
                    .w(px(LABEL_BOX_WIDTH))
                    .text_size(px(AXIS_FONT_SIZE))
                    .text_color(color)
                    .child(text.clone());
                let label = match align {
                    TextAlign::Top => label
                        .left(px(p.x - half))
                        .top(px(p.y))
                        .text_align(gpui::TextAlign::Center),
                    TextAlign::Left => label
                        .left(px(p.x - LABEL_BOX_WIDTH))
                        .top(px(p.y - AXIS_FONT_SIZE * 0.7))
                        .text_align(gpui::TextAlign::Right),
                    TextAlign::Center => label
                        .left(px(p.x - half))
                        .top(px(p.y - AXIS_FONT_SIZE * 0.7))
                        .text_align(gpui::TextAlign::Center),
                };
                elements.push(label.into_any_element());
            }
            ElementKind::TooltipText {
                anchor,
                offset_y,
                text,
                font_size,
            } => {
                // baseline sits at offset_y above the anchor
                let p = space.to_screen(*anchor + Vec2::new(0.0, *offset_y));
                elements.push(
                    div()
                        .absolute()
                        .left(px(p.x - half))
                        .top(px(p.y - font_size))
                        .w(px(LABEL_BOX_WIDTH))
                        .text_align(gpui::TextAlign::Center)
                        .text_size(px(*font_size))
                        .text_color(color)
                        .child(text.clone())
                        .into_any_element(),
                );
            }
            _ => {}
        }
    }
    elements
}

/// One KPI card as a GPUI element. Divs cannot rotate, so the hover tilt
/// shows as the card's projected width and the badge only pulses.
pub fn kpi_card(card: &KpiCardFrame, theme: Theme) -> Stateful<Div> {
    let (from, to) = card_gradient(theme);
    let scale = card.scale;
    let tilt = card.rotate_y.to_radians().cos();
    let size = Vec2::new(card.rect.size.x * tilt, card.rect.size.y) * scale;
    // scale around the card center
    let origin = card.rect.origin + (card.rect.size - size) / 2.0 + Vec2::new(0.0, card.offset_y);
    let white = gpui::white();

    div()
        .id(("kpi-card", card.index))
        .absolute()
        .left(px(origin.x))
        .top(px(origin.y))
        .w(px(size.x))
        .h(px(size.y))
        .p(px(25.0))
        .rounded(px(20.0))
        .border_1()
        .border_color(white.opacity(0.1 * card.opacity))
        .bg(linear_gradient(
            135.0,
            linear_color_stop(from.opacity(card.opacity), 0.0),
            linear_color_stop(to.opacity(card.opacity), 1.0),
        ))
        .text_color(white.opacity(card.opacity))
        .flex()
        .justify_between()
        .items_start()
        .child(
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .text_size(px(40.0 * card.icon_scale.max(0.0)))
                        .mb(px(10.0))
                        .child(card.icon.clone()),
                )
                .child(
                    div()
                        .text_size(px(16.0))
                        .mb(px(10.0))
                        .text_color(white.opacity(0.9 * card.opacity))
                        .child(card.title.clone()),
                )
                .child(
                    div()
                        .relative()
                        .left(px(card.value_offset_x))
                        .text_size(px(32.0))
                        .font_weight(gpui::FontWeight::BOLD)
                        .mb(px(10.0))
                        .text_color(white.opacity(card.value_opacity * card.opacity))
                        .child(card.value.clone()),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .text_size(px(14.0))
                        .child(
                            div()
                                .mr(px(5.0))
                                .text_color(card.trend.color().opacity(card.change_opacity))
                                .child(card.trend.arrow()),
                        )
                        .child(
                            div()
                                .text_color(white.opacity(0.8 * card.change_opacity))
                                .child(card.change_text.clone()),
                        ),
                ),
        )
        .when(card.hovered, |d| d.shadow_lg())
        .child(
            div()
                .size(px(60.0 * card.badge_scale))
                .rounded_full()
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(24.0 * card.badge_scale))
                .bg(linear_gradient(
                    135.0,
                    linear_color_stop(card.accent.opacity(card.opacity), 0.0),
                    linear_color_stop(card.accent.opacity(0.53 * card.opacity), 1.0),
                ))
                .child("💎"),
        )
}
