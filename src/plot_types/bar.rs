use crate::animation::Transition;
use crate::data_types::Record;
use crate::scene::{Element, ElementKind, Property};
use crate::transform::PlotTransform;

use super::{DrawContext, PlotRenderer};

/// Resting geometry of one bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One bar per record, centered on its date and standing on the baseline.
#[derive(Clone, Debug, Default)]
pub struct BarPlot;

impl BarPlot {
    pub fn rects(transform: &PlotTransform, records: &[Record], width: f32) -> Vec<BarRect> {
        let baseline = transform.baseline();
        records
            .iter()
            .map(|record| {
                let top = transform.record_to_screen(record);
                BarRect {
                    x: top.x - width / 2.0,
                    y: top.y,
                    width,
                    height: baseline - top.y,
                }
            })
            .collect()
    }
}

impl PlotRenderer for BarPlot {
    fn draw(&self, records: &[Record], cx: &mut DrawContext<'_>) {
        let baseline = cx.transform.baseline();
        let rects = Self::rects(cx.transform, records, cx.timings.bar_width);
        for (index, rect) in rects.into_iter().enumerate() {
            let id = cx.scene.allocate_id();
            cx.scene.push(
                Element::new(
                    id,
                    ElementKind::Bar {
                        x: rect.x,
                        width: rect.width,
                        record: index,
                    },
                )
                .fill(cx.palette.primary)
                .attr(Property::Y, baseline)
                .attr(Property::Height, 0.0),
            );

            let delay = cx.timings.bar_delay(index);
            // top and height move together so the bottom edge stays on the baseline
            cx.timeline.schedule(
                Transition::new(id, Property::Y, baseline, rect.y)
                    .delay(delay)
                    .duration_ms(cx.timings.bar_grow_ms),
            );
            cx.timeline.schedule(
                Transition::new(id, Property::Height, 0.0, rect.height)
                    .delay(delay)
                    .duration_ms(cx.timings.bar_grow_ms),
            );
        }
    }
}
