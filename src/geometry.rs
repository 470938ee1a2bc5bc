//! Path geometry on top of `kurbo`.
//!
//! Scene paths are `kurbo::BezPath`s in viewport coordinates. Arc length
//! and the dash-offset reveal are measured on the curves themselves.

use glam::Vec2;
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Shape as _};

pub use kurbo::PathEl;

/// Arc length accuracy, in viewport pixels.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

pub fn to_point(v: Vec2) -> kurbo::Point {
    kurbo::Point::new(v.x as f64, v.y as f64)
}

pub fn to_vec2(p: kurbo::Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Total stroked length, closing segments included.
pub fn path_length(path: &BezPath) -> f32 {
    path.perimeter(ARCLEN_ACCURACY) as f32
}

/// The part of `path` covered by its first `length` units, as drawn by a
/// stroke whose dash pattern hides everything after that.
pub fn visible_prefix(path: &BezPath, length: f32) -> BezPath {
    let mut remaining = length.max(0.0) as f64;
    let mut visible = BezPath::new();
    let mut pen: Option<kurbo::Point> = None;

    for seg in path.segments() {
        if remaining <= 0.0 {
            break;
        }
        let seg_len = seg.arclen(ARCLEN_ACCURACY);
        let kept: PathSeg = if seg_len <= remaining {
            remaining -= seg_len;
            seg
        } else {
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY);
            remaining = 0.0;
            seg.subsegment(0.0..t)
        };
        if pen != Some(kept.start()) {
            visible.move_to(kept.start());
        }
        visible.push(kept.as_path_el());
        pen = Some(kept.end());
    }
    visible
}
