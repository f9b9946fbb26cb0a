use super::history::{Axis, RingHistory, MIDDLE, OLDEST};
use super::solver::{AccelerationSolver, KinematicBoundary, SolveOutcome, Trajectory, STEPS};

/// Points emitted per interpolated segment, including both ends.
pub const SAMPLES_PER_SEGMENT: usize = STEPS + 1;

/// Floor of the squared radius, reached once `-0.5 * speed + 8.0` drops below it.
pub const MIN_RADIUS_SQUARED: f64 = 0.3;

/// One point of the smoothed path with its brush radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Faster motion gives a thinner footprint, never thinner than `sqrt(0.3)`.
pub fn radius_for_speed(speed: f64) -> f64 {
    (-0.5 * speed + 8.0).max(MIN_RADIUS_SQUARED).sqrt()
}

/// Result of interpolating the oldest/middle pair of the ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub points: Vec<PathPoint>,
    /// False when either axis fell back to a straight line.
    pub converged: bool,
}

/// Per-axis samples of one segment: `(position, velocity)` at t = 0, 0.1, ..., 1.0.
fn sample_axis(
    solver: &AccelerationSolver,
    start: KinematicBoundary,
    end: KinematicBoundary,
) -> (Vec<KinematicBoundary>, bool) {
    match solver.solve(start, end) {
        SolveOutcome::Converged(pair) => (
            Trajectory::new(start, pair)
                .take(SAMPLES_PER_SEGMENT)
                .collect(),
            true,
        ),
        SolveOutcome::GaveUp => {
            let velocity = end.position - start.position;
            let samples = (0..SAMPLES_PER_SEGMENT)
                .map(|n| {
                    let t = n as f64 / STEPS as f64;
                    KinematicBoundary::new(start.position + velocity * t, velocity)
                })
                .collect();
            (samples, false)
        }
    }
}

fn boundaries(ring: &RingHistory, axis: Axis) -> Option<(KinematicBoundary, KinematicBoundary)> {
    let start = ring.slot(OLDEST)?.axis(axis);
    let end = ring.slot(MIDDLE)?.axis(axis);
    Some((
        KinematicBoundary::new(start.position, start.velocity?),
        KinematicBoundary::new(end.position, end.velocity?),
    ))
}

/// Interpolate between the oldest and middle slots. Returns `None` while the
/// ring lacks either slot or either velocity.
pub fn interpolate(ring: &RingHistory, solver: &AccelerationSolver) -> Option<Segment> {
    let (x_start, x_end) = boundaries(ring, Axis::X)?;
    let (y_start, y_end) = boundaries(ring, Axis::Y)?;

    let (xs, x_converged) = sample_axis(solver, x_start, x_end);
    let (ys, y_converged) = sample_axis(solver, y_start, y_end);

    let points = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| {
            let speed = (x.velocity * x.velocity + y.velocity * y.velocity).sqrt();
            PathPoint {
                x: x.position,
                y: y.position,
                radius: radius_for_speed(speed),
            }
        })
        .collect();

    Some(Segment {
        points,
        converged: x_converged && y_converged,
    })
}
