use crate::animation::{Easing, Transition};
use crate::data_types::Record;
use crate::geometry::path_length;
use crate::scene::{Element, ElementKind, Property};
use crate::transform::PlotTransform;
use kurbo::BezPath;

use super::curve::{cardinal, DEFAULT_TENSION};
use super::{DrawContext, PlotRenderer};

/// Smooth line through every record's total.
#[derive(Clone, Debug, Default)]
pub struct LinePlot;

impl LinePlot {
    /// Cardinal curve through the mapped records. A single record gives a
    /// zero-length closed subpath.
    pub fn path(transform: &PlotTransform, records: &[Record]) -> BezPath {
        let points = transform.screen_points(records);
        let mut path = BezPath::new();
        cardinal(&mut path, &points, DEFAULT_TENSION, false);
        if points.len() == 1 {
            path.close_path();
        }
        path
    }
}

impl PlotRenderer for LinePlot {
    fn draw(&self, records: &[Record], cx: &mut DrawContext<'_>) {
        let path = Self::path(cx.transform, records);
        let length = path_length(&path);
        let id = cx.scene.allocate_id();
        cx.scene.push(
            Element::new(
                id,
                ElementKind::LinePath {
                    path,
                    length,
                    width: cx.timings.line_width,
                },
            )
            .stroke(cx.palette.primary)
            .attr(Property::DashOffset, length),
        );
        cx.timeline.schedule(
            Transition::new(id, Property::DashOffset, length, 0.0)
                .duration_ms(cx.timings.path_reveal_ms)
                .ease(Easing::Linear),
        );
    }
}
