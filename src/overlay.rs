//! Interaction Overlay: owns the single tooltip slot.
//!
//! Hover behaviour is attached per point once the point has finished
//! growing in. Pointer events arrive as explicit [`PointerEvent`] values;
//! nothing captures drawing state in callbacks.

use glam::Vec2;
use gpui::Hsla;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::animation::{Timeline, Transition};
use crate::scene::{Element, ElementId, ElementKind, Property, Scene};
use crate::utils::currency::CurrencyFormat;

/// Vertical lift of the tooltip above its point.
pub const TOOLTIP_LIFT: f32 = 10.0;
const BOX_OFFSET: Vec2 = Vec2::new(-40.0, -25.0);
const BOX_SIZE: Vec2 = Vec2::new(80.0, 20.0);
const BOX_RADIUS: f32 = 5.0;
const TEXT_OFFSET_Y: f32 = -10.0;
const FONT_SIZE: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(ElementId),
    Leave(ElementId),
}

/// A point that reacts to hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub center: Vec2,
    pub total: f64,
}

/// Colors and timings the tooltip is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipStyle {
    pub background: Hsla,
    pub border: Hsla,
    pub text: Hsla,
    pub fade: Duration,
    pub box_opacity: f32,
    pub currency: CurrencyFormat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub owner: ElementId,
    pub anchor: Vec2,
    pub text: String,
    elements: [Element; 2],
}

impl Tooltip {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionOverlay {
    targets: BTreeMap<ElementId, HoverTarget>,
    tooltip: Option<Tooltip>,
}

impl InteractionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `id` react to pointer-enter.
    pub fn attach(&mut self, id: ElementId, target: HoverTarget) {
        self.targets.insert(id, target);
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.targets.contains_key(&id)
    }

    pub fn attached_count(&self) -> usize {
        self.targets.len()
    }

    /// Forgets all hover targets and drops the tooltip. Called on redraw;
    /// the timeline generation change takes care of its fades.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.tooltip = None;
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Handles one pointer event. Returns true if the tooltip changed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        style: &TooltipStyle,
        scene: &mut Scene,
        timeline: &mut Timeline,
    ) -> bool {
        match event {
            PointerEvent::Enter(id) => {
                let Some(target) = self.targets.get(&id).copied() else {
                    return false;
                };
                self.remove_tooltip(timeline);
                self.tooltip = Some(Self::build_tooltip(id, target, style, scene, timeline));
                true
            }
            PointerEvent::Leave(_) => self.remove_tooltip(timeline),
        }
    }

    /// Attached point under `position`, if any. Later points win on overlap.
    pub fn hit_test(&self, position: Vec2, radius: f32) -> Option<ElementId> {
        self.targets
            .iter()
            .rev()
            .find(|(_, target)| target.center.distance(position) <= radius)
            .map(|(id, _)| *id)
    }

    fn remove_tooltip(&mut self, timeline: &mut Timeline) -> bool {
        let Some(tooltip) = self.tooltip.take() else {
            return false;
        };
        for element in tooltip.elements() {
            timeline.cancel_target(element.id);
        }
        true
    }

    fn build_tooltip(
        owner: ElementId,
        target: HoverTarget,
        style: &TooltipStyle,
        scene: &mut Scene,
        timeline: &mut Timeline,
    ) -> Tooltip {
        let anchor = target.center - Vec2::new(0.0, TOOLTIP_LIFT);
        let text = style.currency.format(target.total);

        let box_id = scene.allocate_id();
        let text_id = scene.allocate_id();
        let frame = Element::new(
            box_id,
            ElementKind::TooltipBox {
                anchor,
                offset: BOX_OFFSET,
                size: BOX_SIZE,
                corner_radius: BOX_RADIUS,
            },
        )
        .fill(style.background)
        .stroke(style.border)
        .attr(Property::Opacity, 0.0);
        let label = Element::new(
            text_id,
            ElementKind::TooltipText {
                anchor,
                offset_y: TEXT_OFFSET_Y,
                text: text.clone(),
                font_size: FONT_SIZE,
            },
        )
        .fill(style.text)
        .attr(Property::Opacity, 0.0);

        timeline.schedule(
            Transition::new(box_id, Property::Opacity, 0.0, style.box_opacity).duration(style.fade),
        );
        timeline.schedule(Transition::new(text_id, Property::Opacity, 0.0, 1.0).duration(style.fade));

        Tooltip {
            owner,
            anchor,
            text,
            elements: [frame, label],
        }
    }
}
