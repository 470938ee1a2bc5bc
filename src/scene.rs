//! Declarative scene: the target geometry of one redraw.
//!
//! A redraw builds a fresh [`Scene`] (elements with their resting
//! attributes) and schedules transitions on the timeline. Sampling the
//! scene against the timeline yields a [`Frame`]: the same elements with
//! animated attributes resolved at the current clock time.

use glam::Vec2;
use gpui::Hsla;
use std::time::Duration;

use crate::animation::Timeline;
use kurbo::BezPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// Attributes that transitions can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Opacity,
    Radius,
    DashOffset,
    Y,
    Height,
    TranslateX,
    TranslateY,
    Scale,
    /// Degrees, clockwise in the screen plane.
    Rotate,
    /// Degrees around the vertical axis.
    RotateY,
}

/// Values of the animatable attributes of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attrs {
    pub opacity: f32,
    pub radius: f32,
    pub dash_offset: f32,
    pub y: f32,
    pub height: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotate: f32,
    pub rotate_y: f32,
}

impl Default for Attrs {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            radius: 0.0,
            dash_offset: 0.0,
            y: 0.0,
            height: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            rotate_y: 0.0,
        }
    }
}

impl Attrs {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::Radius => self.radius,
            Property::DashOffset => self.dash_offset,
            Property::Y => self.y,
            Property::Height => self.height,
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::Scale => self.scale,
            Property::Rotate => self.rotate,
            Property::RotateY => self.rotate_y,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::Radius => self.radius = value,
            Property::DashOffset => self.dash_offset = value,
            Property::Y => self.y = value,
            Property::Height => self.height = value,
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
            Property::Rotate => self.rotate = value,
            Property::RotateY => self.rotate_y = value,
        }
    }
}

const ALL_PROPERTIES: [Property; 10] = [
    Property::Opacity,
    Property::Radius,
    Property::DashOffset,
    Property::Y,
    Property::Height,
    Property::TranslateX,
    Property::TranslateY,
    Property::Scale,
    Property::Rotate,
    Property::RotateY,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Centered horizontally, hanging below the anchor.
    Top,
    /// Right-aligned, vertically centered on the anchor.
    Left,
    /// Centered on the anchor.
    Center,
}

/// Vertical fill gradient, from `bottom_opacity` at the canvas bottom to
/// `top_opacity` at its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub color: Hsla,
    pub bottom_opacity: f32,
    pub top_opacity: f32,
    pub y_bottom: f32,
    pub y_top: f32,
}

impl Gradient {
    pub fn opacity_at(&self, y: f32) -> f32 {
        let span = self.y_bottom - self.y_top;
        if span.abs() < f32::EPSILON {
            return self.top_opacity;
        }
        let t = ((self.y_bottom - y) / span).clamp(0.0, 1.0);
        self.bottom_opacity + (self.top_opacity - self.bottom_opacity) * t
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    AxisLine { from: Vec2, to: Vec2 },
    AxisTick { from: Vec2, to: Vec2 },
    AxisLabel { anchor: Vec2, text: String, align: TextAlign },
    /// Stroked series line; `length` is the full path length used as dash array.
    LinePath { path: BezPath, length: f32, width: f32 },
    /// Filled series area; revealed with the same dash technique as the line.
    AreaPath { path: BezPath, length: f32, gradient: Gradient },
    Point { center: Vec2, record: usize },
    /// Bar anchored at the baseline; `y` and `height` live in the attributes.
    Bar { x: f32, width: f32, record: usize },
    TooltipBox { anchor: Vec2, offset: Vec2, size: Vec2, corner_radius: f32 },
    TooltipText { anchor: Vec2, offset_y: f32, text: String, font_size: f32 },
}

impl ElementKind {
    pub fn is_point(&self) -> bool {
        matches!(self, ElementKind::Point { .. })
    }

    pub fn is_bar(&self) -> bool {
        matches!(self, ElementKind::Bar { .. })
    }

    pub fn is_tooltip(&self) -> bool {
        matches!(
            self,
            ElementKind::TooltipBox { .. } | ElementKind::TooltipText { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub fill: Option<Hsla>,
    pub stroke: Option<Hsla>,
    pub attrs: Attrs,
}

impl Element {
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            fill: None,
            stroke: None,
            attrs: Attrs::default(),
        }
    }

    pub fn fill(mut self, color: Hsla) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Hsla) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn attr(mut self, property: Property, value: f32) -> Self {
        self.attrs.set(property, value);
        self
    }

    /// Length of a path element still hidden by its dash offset.
    pub fn visible_length(&self) -> Option<f32> {
        match &self.kind {
            ElementKind::LinePath { length, .. } | ElementKind::AreaPath { length, .. } => {
                Some((length - self.attrs.dash_offset).clamp(0.0, *length))
            }
            _ => None,
        }
    }

    /// Copy of the element with animated attributes resolved on `timeline`.
    pub fn sampled(&self, timeline: &Timeline) -> Element {
        let mut out = self.clone();
        for property in ALL_PROPERTIES {
            if let Some(value) = timeline.sample(self.id, property) {
                out.attrs.set(property, value);
            }
        }
        out
    }
}

/// Elements of one redraw, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn push(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.elements.push(element);
        id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn sample(&self, timeline: &Timeline) -> Vec<Element> {
        self.elements.iter().map(|e| e.sampled(timeline)).collect()
    }
}

/// Everything visible at one clock time.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub time: Duration,
    pub background: Hsla,
    pub elements: Vec<Element>,
}

impl Frame {
    pub fn points(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind.is_point())
    }

    pub fn bars(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind.is_bar())
    }

    pub fn tooltip(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind.is_tooltip())
    }

    pub fn line_path(&self) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| matches!(e.kind, ElementKind::LinePath { .. }))
    }

    pub fn area_path(&self) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| matches!(e.kind, ElementKind::AreaPath { .. }))
    }

    pub fn axis_labels(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::AxisLabel { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
