use crate::utils::vector::Vec2;

/// Direction of each segment `points[i] -> points[i + 1]`.
pub fn differences(points: &[Vec2]) -> Vec<Vec2> {
    points.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Unit tangent at every point: the normalised average of the two adjacent
/// segment directions, with the end points taking their single neighbour's
/// direction.
///
/// Returns nothing for fewer than two points. Where the averaged direction has
/// no length (a repeated point, or a stroke doubling back on itself) the tangent
/// is `Vec2::ZERO`, which the intersection step treats as degenerate.
pub fn tangents(points: &[Vec2]) -> Vec<Vec2> {
    let directions = differences(points);
    let (Some(&first), Some(&last)) = (directions.first(), directions.last()) else {
        return Vec::new();
    };

    let padded: Vec<Vec2> = std::iter::once(first)
        .chain(directions.iter().copied())
        .chain(std::iter::once(last))
        .collect();

    padded
        .windows(2)
        .map(|w| ((w[0] + w[1]) * 0.5).normalized().unwrap_or(Vec2::ZERO))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
        raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }

    #[test]
    fn one_tangent_per_point() {
        let points = pts(&[(0.0, 0.0), (3.0, 1.0), (4.0, 5.0), (-2.0, 7.0), (-6.0, 0.5)]);
        let ts = tangents(&points);
        assert_eq!(ts.len(), points.len());
        for t in ts {
            assert!((t.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn corner_tangent_bisects_the_turn() {
        let ts = tangents(&pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]));
        assert_eq!(ts.len(), 3);
        assert_eq!(ts[0], Vec2::new(1.0, 0.0));
        assert_eq!(ts[2], Vec2::new(0.0, 1.0));
        let diagonal = 0.5_f64.sqrt();
        assert!((ts[1].x - diagonal).abs() < 1e-9);
        assert!((ts[1].y - diagonal).abs() < 1e-9);
    }

    #[test]
    fn too_few_points() {
        assert!(tangents(&[]).is_empty());
        assert!(tangents(&pts(&[(1.0, 1.0)])).is_empty());
        assert_eq!(tangents(&pts(&[(0.0, 0.0), (0.0, 2.0)])).len(), 2);
    }

    #[test]
    fn repeated_point_yields_zero_tangent() {
        let ts = tangents(&pts(&[(5.0, 5.0), (5.0, 5.0)]));
        assert_eq!(ts, vec![Vec2::ZERO, Vec2::ZERO]);
    }
}
