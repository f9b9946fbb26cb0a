//! Tangent/intersection curve fitting for freehand multi-point strokes.

pub mod intersect;
pub mod sheet;
pub mod tangent;

use crate::utils::vector::Vec2;

/// Quadratic piece from `anchor` bent toward `control`, ending at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    pub anchor: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

/// One control point per adjacent pair of `points`, from the intersection of
/// their tangent lines.
pub fn control_points(points: &[Vec2], tangents: &[Vec2]) -> Vec<Vec2> {
    debug_assert_eq!(points.len(), tangents.len(), "dimension mismatch");
    points
        .iter()
        .zip(tangents)
        .collect::<Vec<_>>()
        .windows(2)
        .map(|w| {
            let (&p1, &t1) = w[0];
            let (&p2, &t2) = w[1];
            intersect::control_point(p1, t1, p2, t2)
        })
        .collect()
}

/// Smooth curve through `points`: `points.len() - 1` segments, none for fewer
/// than two points.
pub fn curve_segments(points: &[Vec2]) -> Vec<CurveSegment> {
    let tangents = tangent::tangents(points);
    control_points(points, &tangents)
        .into_iter()
        .zip(points.windows(2))
        .map(|(control, w)| CurveSegment {
            anchor: w[0],
            control,
            end: w[1],
        })
        .collect()
}
