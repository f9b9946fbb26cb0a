use super::{curve_segments, CurveSegment};
use crate::utils::vector::{midpoint, Vec2};

/// Point list for the curve tool. Each move appends the midpoint between the
/// last point and the pointer, which damps jitter before the curve is fitted.
#[derive(Clone, Debug, Default)]
pub struct CurveSheet {
    points: Vec<Vec2>,
    pen_down: bool,
}

impl CurveSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `pos`, discarding the previous one.
    pub fn pen_down(&mut self, pos: Vec2) {
        self.points.clear();
        self.points.push(pos);
        self.pen_down = true;
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    /// Returns true when the point list changed.
    pub fn pen_move(&mut self, pos: Vec2) -> bool {
        if !self.pen_down {
            return false;
        }
        let next = match self.points.last() {
            Some(&last) => midpoint(last, pos),
            None => pos,
        };
        self.points.push(next);
        true
    }

    pub fn is_down(&self) -> bool {
        self.pen_down
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn current_curve_points(&self) -> Vec<CurveSegment> {
        curve_segments(&self.points)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
