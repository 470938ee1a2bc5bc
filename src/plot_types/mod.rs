// Shape builders and their entrance animations

pub mod area;
pub mod bar;
pub mod curve;
pub mod line;
pub mod points;

pub use area::AreaPlot;
pub use bar::BarPlot;
pub use line::LinePlot;
pub use points::PointPlot;

use crate::animation::Timeline;
use crate::data_types::{AnimationTimings, Record};
use crate::scene::Scene;
use crate::theme::Palette;
use crate::transform::PlotTransform;

/// What a series needs while it is being drawn into a redraw.
pub struct DrawContext<'a> {
    pub transform: &'a PlotTransform,
    pub palette: &'a Palette,
    pub timings: &'a AnimationTimings,
    pub scene: &'a mut Scene,
    pub timeline: &'a mut Timeline,
}

/// Trait for drawing one encoding of the records.
///
/// Implementors push their resting elements into the scene and schedule the
/// transitions that bring them there. Geometry itself is computed by pure
/// functions on each plot type so it can be tested without a timeline.
pub trait PlotRenderer {
    fn draw(&self, records: &[Record], cx: &mut DrawContext<'_>);
}
