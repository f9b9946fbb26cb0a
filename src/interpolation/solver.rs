//! Two-phase constant-acceleration motion model for one axis.
//!
//! A segment spans one unit of time, integrated in `STEPS` explicit Euler steps
//! of `STEP`. Acceleration `a` applies while the simulated time is below
//! `SWITCH_TIME`, acceleration `b` afterwards. The solver searches for the
//! `(a, b)` pair that carries the start boundary onto the end boundary.

/// Integration step, in segment time units.
pub const STEP: f64 = 0.1;
/// Number of integration steps covering one segment.
pub const STEPS: usize = 10;
/// Time at which the second acceleration takes over.
pub const SWITCH_TIME: f64 = 0.5;
/// Position and velocity must both land within this distance of the target.
pub const TOLERANCE: f64 = 0.001;
/// Proportional gain of each correction.
pub const GAIN: f64 = 1.0;
/// Default bound on correction rounds before the solver gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Position and velocity at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicBoundary {
    pub position: f64,
    pub velocity: f64,
}

impl KinematicBoundary {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }
}

/// Accelerations for the first and second half of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelerationPair {
    pub a: f64,
    pub b: f64,
}

/// Forward simulation of the model. Yields the state *before* each step is
/// integrated, so the first item is the start boundary itself and item `n` is
/// the state after `n` steps.
#[derive(Clone, Debug)]
pub struct Trajectory {
    state: KinematicBoundary,
    pair: AccelerationPair,
    step: usize,
}

impl Trajectory {
    pub fn new(start: KinematicBoundary, pair: AccelerationPair) -> Self {
        Self {
            state: start,
            pair,
            step: 0,
        }
    }
}

impl Iterator for Trajectory {
    type Item = KinematicBoundary;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.state;
        let t = self.step as f64 * STEP;
        let acceleration = if t < SWITCH_TIME {
            self.pair.a
        } else {
            self.pair.b
        };
        self.state.position += STEP * current.velocity;
        self.state.velocity += acceleration * STEP;
        self.step += 1;
        Some(current)
    }
}

/// State reached after integrating a whole segment.
pub fn segment_end(start: KinematicBoundary, pair: AccelerationPair) -> KinematicBoundary {
    Trajectory::new(start, pair)
        .nth(STEPS)
        .unwrap_or(start)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveOutcome {
    Converged(AccelerationPair),
    /// Tolerances were not met within the iteration bound.
    GaveUp,
}

/// Coordinate-descent search for the accelerations joining two boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelerationSolver {
    pub max_iterations: usize,
}

impl Default for AccelerationSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AccelerationSolver {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Correct the first-half acceleration until the end position matches, then
    /// the second-half acceleration until the end velocity matches, re-checking
    /// position after every correction.
    pub fn solve(&self, start: KinematicBoundary, end: KinematicBoundary) -> SolveOutcome {
        let mut pair = AccelerationPair::default();

        for iteration in 0..=self.max_iterations {
            let reached = segment_end(start, pair);
            let position_error = reached.position - end.position;
            let velocity_error = reached.velocity - end.velocity;
            if !position_error.is_finite() || !velocity_error.is_finite() {
                break;
            }

            let position_ok = position_error.abs() < TOLERANCE;
            if position_ok && velocity_error.abs() < TOLERANCE {
                return SolveOutcome::Converged(pair);
            }
            if iteration == self.max_iterations {
                break;
            }
            if !position_ok {
                pair.a += -position_error * GAIN;
            } else {
                pair.b += -velocity_error * GAIN;
            }
        }

        log::warn!(
            "acceleration solver gave up (cap {}): {:?} -> {:?}",
            self.max_iterations,
            start,
            end
        );
        SolveOutcome::GaveUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_lands_on(start: KinematicBoundary, end: KinematicBoundary) {
        let SolveOutcome::Converged(pair) = AccelerationSolver::default().solve(start, end) else {
            panic!("no convergence for {start:?} -> {end:?}");
        };
        let reached = segment_end(start, pair);
        assert!((reached.position - end.position).abs() < TOLERANCE);
        assert!((reached.velocity - end.velocity).abs() < TOLERANCE);
    }

    #[test]
    fn trajectory_samples_before_integrating() {
        let start = KinematicBoundary::new(2.0, 1.0);
        let states: Vec<_> = Trajectory::new(start, AccelerationPair::default())
            .take(STEPS + 1)
            .collect();
        assert_eq!(states[0], start);
        assert!((states[STEPS].position - 3.0).abs() < 1e-12);
        assert_eq!(states[STEPS].velocity, 1.0);
    }

    #[test]
    fn acceleration_switches_at_half_time() {
        let pair = AccelerationPair { a: 10.0, b: -10.0 };
        let states: Vec<_> = Trajectory::new(KinematicBoundary::default(), pair)
            .take(STEPS + 1)
            .collect();
        // Five steps at +a, five at -b.
        assert!((states[5].velocity - 5.0).abs() < 1e-12);
        assert!(states[STEPS].velocity.abs() < 1e-12);
    }

    #[test]
    fn uniform_motion_needs_no_correction() {
        let start = KinematicBoundary::new(0.0, 1.0);
        let end = KinematicBoundary::new(1.0, 1.0);
        assert_eq!(
            AccelerationSolver::default().solve(start, end),
            SolveOutcome::Converged(AccelerationPair::default())
        );
    }

    #[test]
    fn matches_boundaries_for_pointer_sized_jumps() {
        assert_lands_on(KinematicBoundary::new(0.0, 0.0), KinematicBoundary::new(100.0, 50.0));
        assert_lands_on(KinematicBoundary::new(0.0, -50.0), KinematicBoundary::new(300.0, 80.0));
        assert_lands_on(KinematicBoundary::new(640.5, 3.0), KinematicBoundary::new(638.0, -2.5));

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let start = KinematicBoundary::new(
                rng.random_range(-500.0..500.0),
                rng.random_range(-200.0..200.0),
            );
            let end = KinematicBoundary::new(
                rng.random_range(-500.0..500.0),
                rng.random_range(-200.0..200.0),
            );
            assert_lands_on(start, end);
        }
    }

    #[test]
    fn gives_up_at_the_iteration_cap() {
        let solver = AccelerationSolver::new(3);
        let outcome = solver.solve(
            KinematicBoundary::new(0.0, 0.0),
            KinematicBoundary::new(100.0, 50.0),
        );
        assert_eq!(outcome, SolveOutcome::GaveUp);
    }

    #[test]
    fn non_finite_input_gives_up() {
        let outcome = AccelerationSolver::default().solve(
            KinematicBoundary::new(f64::NAN, 0.0),
            KinematicBoundary::new(1.0, 0.0),
        );
        assert_eq!(outcome, SolveOutcome::GaveUp);
    }
}
