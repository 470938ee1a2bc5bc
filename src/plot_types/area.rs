// Area plot implementation

use crate::animation::{Easing, Transition};
use crate::data_types::Record;
use crate::geometry::path_length;
use crate::scene::{Element, ElementKind, Gradient, Property};
use crate::transform::PlotTransform;
use glam::Vec2;
use kurbo::BezPath;

use super::curve::{cardinal, DEFAULT_TENSION};
use super::{DrawContext, PlotRenderer};

/// Opacity of the gradient at the top of the canvas.
const GRADIENT_TOP_OPACITY: f32 = 0.8;

/// Filled region between the smooth total curve and the baseline.
#[derive(Clone, Debug, Default)]
pub struct AreaPlot;

impl AreaPlot {
    /// Upper boundary along the records, down to the baseline, back along
    /// the baseline and closed.
    pub fn path(transform: &PlotTransform, records: &[Record]) -> BezPath {
        let upper = transform.screen_points(records);
        let baseline = transform.baseline();
        let lower: Vec<Vec2> = upper
            .iter()
            .rev()
            .map(|p| Vec2::new(p.x, baseline))
            .collect();

        let mut path = BezPath::new();
        cardinal(&mut path, &upper, DEFAULT_TENSION, false);
        cardinal(&mut path, &lower, DEFAULT_TENSION, true);
        if !path.is_empty() {
            path.close_path();
        }
        path
    }
}

impl PlotRenderer for AreaPlot {
    fn draw(&self, records: &[Record], cx: &mut DrawContext<'_>) {
        let path = Self::path(cx.transform, records);
        let length = path_length(&path);
        let gradient = Gradient {
            color: cx.palette.primary,
            bottom_opacity: 0.0,
            top_opacity: GRADIENT_TOP_OPACITY,
            y_bottom: cx.transform.viewport.height,
            y_top: 0.0,
        };
        let id = cx.scene.allocate_id();
        cx.scene.push(
            Element::new(
                id,
                ElementKind::AreaPath {
                    path,
                    length,
                    gradient,
                },
            )
            .attr(Property::DashOffset, length),
        );
        cx.timeline.schedule(
            Transition::new(id, Property::DashOffset, length, 0.0)
                .duration_ms(cx.timings.path_reveal_ms)
                .ease(Easing::Linear),
        );
    }
}
