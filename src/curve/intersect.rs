use crate::utils::vector::{distance, midpoint, Vec2};

/// Lines closer to parallel than this (`1 - cos²θ`) are not intersected.
pub const PARALLEL_EPSILON: f64 = 0.0001;
/// Closest points nearer than this count as a true intersection.
pub const INTERSECTION_EPSILON: f64 = 0.000001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// A direction had zero length, or the lines are parallel.
    NoSolution,
    Intersected(Vec2),
    /// The lines miss each other; closest point on each line.
    Disjoint(Vec2, Vec2),
}

impl Intersection {
    /// The intersection point, or `fallback` when there is none.
    pub fn point_or(self, fallback: Vec2) -> Vec2 {
        match self {
            Intersection::Intersected(p) => p,
            Intersection::NoSolution | Intersection::Disjoint(..) => fallback,
        }
    }
}

/// Closest approach of line `a -> b` and line `c -> d`.
pub fn intersect_lines(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Intersection {
    let (Some(n1), Some(n2)) = ((b - a).normalized(), (d - c).normalized()) else {
        return Intersection::NoSolution;
    };

    let cos = n1.dot(n2);
    let sin_sq = 1.0 - cos * cos;
    if sin_sq < PARALLEL_EPSILON {
        return Intersection::NoSolution;
    }

    let ac = c - a;
    let d1 = (ac.dot(n1) - cos * ac.dot(n2)) / sin_sq;
    let d2 = (cos * ac.dot(n1) - ac.dot(n2)) / sin_sq;

    let on_first = a + n1 * d1;
    let on_second = c + n2 * d2;

    if distance(on_first, on_second) < INTERSECTION_EPSILON {
        Intersection::Intersected(on_first)
    } else {
        Intersection::Disjoint(on_first, on_second)
    }
}

/// Control point between two anchors from their tangent lines, falling back to
/// the anchors' midpoint when the lines do not meet.
pub fn control_point(anchor: Vec2, tangent: Vec2, next: Vec2, next_tangent: Vec2) -> Vec2 {
    let result = intersect_lines(anchor, anchor + tangent, next, next + next_tangent);
    if !matches!(result, Intersection::Intersected(_)) {
        log::trace!("no tangent intersection between {:?} and {:?}", anchor, next);
    }
    result.point_or(midpoint(anchor, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_lines_meet() {
        let result = intersect_lines(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, -3.0),
            Vec2::new(5.0, 2.0),
        );
        let Intersection::Intersected(p) = result else {
            panic!("expected an intersection, got {result:?}");
        };
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn intersection_may_lie_behind_the_anchor() {
        let result = intersect_lines(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, -4.0),
            Vec2::new(1.0, -4.0),
        );
        let p = result.point_or(Vec2::ZERO);
        assert!((p.x + 4.0).abs() < 1e-9);
        assert!((p.y + 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_direction_has_no_solution() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(
            intersect_lines(p, p, Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)),
            Intersection::NoSolution
        );
        assert_eq!(
            intersect_lines(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), p, p),
            Intersection::NoSolution
        );
    }

    #[test]
    fn parallel_lines_fall_back_to_midpoint() {
        let a = Vec2::new(0.0, 0.0);
        let c = Vec2::new(10.0, 4.0);
        let dir = Vec2::new(1.0, 0.0);
        assert_eq!(intersect_lines(a, a + dir, c, c + dir), Intersection::NoSolution);
        assert_eq!(control_point(a, dir, c, dir), Vec2::new(5.0, 2.0));

        // Colinear and nearly parallel as well.
        let c = Vec2::new(10.0, 0.0);
        assert_eq!(control_point(a, dir, c, dir * -1.0), Vec2::new(5.0, 0.0));
        let almost = Vec2::new(1.0, 0.001).normalized().unwrap();
        assert_eq!(intersect_lines(a, a + dir, c, c + almost), Intersection::NoSolution);
    }

    #[test]
    fn coincident_anchors_fall_back_to_the_shared_point() {
        let p = Vec2::new(7.0, -2.0);
        assert_eq!(intersect_lines(p, p, p, p), Intersection::NoSolution);
        assert_eq!(control_point(p, Vec2::ZERO, p, Vec2::ZERO), p);
    }

    #[test]
    fn disjoint_falls_back_too() {
        let result = Intersection::Disjoint(Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0));
        assert_eq!(result.point_or(Vec2::new(9.0, 9.0)), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn rounding_at_large_coordinates_misses() {
        // Closest points land ~1.9e-6 apart once the offsets reach 1e10.
        let anchor = Vec2::new(0.0, 0.0);
        let tangent = Vec2::new(1.0, 0.0);
        let next = Vec2::new(9310887105.0, -9846175033.0);
        let next_tangent = Vec2::new(3.0, 7.0);

        let result = intersect_lines(anchor, anchor + tangent, next, next + next_tangent);
        let Intersection::Disjoint(on_first, on_second) = result else {
            panic!("expected a near miss, got {result:?}");
        };
        assert!(distance(on_first, on_second) >= INTERSECTION_EPSILON);
        assert_eq!(on_first.y, 0.0);

        assert_eq!(
            control_point(anchor, tangent, next, next_tangent),
            Vec2::new(4655443552.5, -4923087516.5)
        );
    }
}
