use crate::interpolation::history::Sample;
use crate::interpolation::sampler::PathPoint;
use crate::interpolation::solver::AccelerationSolver;
use crate::interpolation::Interpolator;
use crate::utils::color::Color;

/// The kinematic pen: contact state, colour and the latest smoothed segment.
#[derive(Clone, Debug)]
pub struct Pen {
    is_down: bool,
    interpolator: Interpolator,
    path: Vec<PathPoint>,
    pub color: Color,
}

impl Pen {
    pub fn new(color: Color, solver: AccelerationSolver) -> Self {
        Self {
            is_down: false,
            interpolator: Interpolator::new(solver),
            path: Vec::new(),
            color,
        }
    }

    pub fn down(&mut self) {
        self.is_down = true;
    }

    pub fn up(&mut self) {
        self.is_down = false;
    }

    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Feed a pointer position; the path is replaced by whatever segment the
    /// interpolator produced, possibly none.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.path = self.interpolator.feed(Sample::new(x, y, self.is_down));
    }

    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    pub fn non_converged(&self) -> usize {
        self.interpolator.non_converged()
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLUE, AccelerationSolver::default())
    }
}
