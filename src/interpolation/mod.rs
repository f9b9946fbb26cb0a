//! Kinematic point interpolation: turns raw pointer samples into a densely
//! sampled path whose radius follows the local speed.

pub mod history;
pub mod sampler;
pub mod solver;
pub mod velocity;
pub mod window;

use history::{RingHistory, Sample};
use sampler::PathPoint;
use solver::AccelerationSolver;

/// Feeds samples through the ring, velocity estimate, solver and sampler.
#[derive(Clone, Debug, Default)]
pub struct Interpolator {
    ring: RingHistory,
    solver: AccelerationSolver,
    non_converged: usize,
}

impl Interpolator {
    pub fn new(solver: AccelerationSolver) -> Self {
        Self {
            ring: RingHistory::new(),
            solver,
            non_converged: 0,
        }
    }

    /// Push a sample and return the freshly interpolated segment between the
    /// two samples before it. Empty until three samples have been seen.
    pub fn feed(&mut self, sample: Sample) -> Vec<PathPoint> {
        self.ring.feed(sample);
        if !velocity::estimate_middle(&mut self.ring).is_ready() {
            return Vec::new();
        }
        match sampler::interpolate(&self.ring, &self.solver) {
            Some(segment) => {
                if !segment.converged {
                    self.non_converged += 1;
                }
                segment.points
            }
            None => Vec::new(),
        }
    }

    pub fn feed_sample(&mut self, x: f64, y: f64, pen_down: bool) -> Vec<PathPoint> {
        self.feed(Sample::new(x, y, pen_down))
    }

    /// Segments that fell back to straight lines since creation.
    pub fn non_converged(&self) -> usize {
        self.non_converged
    }

    pub fn history(&self) -> &RingHistory {
        &self.ring
    }
}
