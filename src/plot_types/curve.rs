//! Cardinal spline interpolation.
//!
//! Consecutive points are joined by cubic segments whose tangents follow the
//! neighbouring points, so the curve passes through every point with
//! tangential continuity. At the ends the tangent collapses onto the end
//! point itself.

use glam::Vec2;
use kurbo::BezPath;

use crate::geometry::to_point;

/// Tension of the default cardinal curve.
pub const DEFAULT_TENSION: f32 = 0.0;

/// Appends a cardinal curve through `points` to `path`.
///
/// With `continue_subpath` the first point is reached with a line from the
/// current position instead of starting a new subpath. Two points give a
/// straight segment; one point only positions the pen.
pub fn cardinal(path: &mut BezPath, points: &[Vec2], tension: f32, continue_subpath: bool) {
    let Some(&first) = points.first() else {
        return;
    };
    if continue_subpath {
        path.line_to(to_point(first));
    } else {
        path.move_to(to_point(first));
    }

    match points.len() {
        1 => {}
        2 => path.line_to(to_point(points[1])),
        n => {
            let k = (1.0 - tension) / 6.0;
            for i in 0..n - 1 {
                let p1 = points[i];
                let p2 = points[i + 1];
                let ctrl_a = if i == 0 {
                    p1
                } else {
                    p1 + (p2 - points[i - 1]) * k
                };
                let ctrl_b = if i + 2 >= n {
                    p2
                } else {
                    p2 + (p1 - points[i + 2]) * k
                };
                path.curve_to(to_point(ctrl_a), to_point(ctrl_b), to_point(p2));
            }
        }
    }
}
