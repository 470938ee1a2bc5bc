use glam::Vec2;

use crate::animation::Transition;
use crate::data_types::Record;
use crate::scene::{Element, ElementKind, Property};
use crate::transform::PlotTransform;

use super::{DrawContext, PlotRenderer};

/// One dot per record, growing in one after another.
#[derive(Clone, Debug, Default)]
pub struct PointPlot;

impl PointPlot {
    pub fn centers(transform: &PlotTransform, records: &[Record]) -> Vec<Vec2> {
        transform.screen_points(records)
    }
}

impl PlotRenderer for PointPlot {
    fn draw(&self, records: &[Record], cx: &mut DrawContext<'_>) {
        for (index, center) in Self::centers(cx.transform, records).into_iter().enumerate() {
            let id = cx.scene.allocate_id();
            cx.scene.push(
                Element::new(id, ElementKind::Point { center, record: index })
                    .fill(cx.palette.secondary)
                    .attr(Property::Radius, 0.0),
            );
            cx.timeline.schedule(
                Transition::new(id, Property::Radius, 0.0, cx.timings.point_radius)
                    .delay(cx.timings.point_delay(index))
                    .duration_ms(cx.timings.point_grow_ms),
            );
        }
    }
}
