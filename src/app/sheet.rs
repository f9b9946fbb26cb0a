use super::pen::Pen;
use crate::config::Settings;
use crate::error::Result;
use crate::interpolation::sampler::PathPoint;
use crate::interpolation::window::Portion;
use crate::utils::{color::Color, profiler::ScopeTimer};

/// Everything the renderer needs to composite one piece of a stroke: a halo
/// `outline_scale` times wider in `outline_color`, then the ink on top.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeCommand {
    pub points: Vec<PathPoint>,
    pub color: Color,
    pub outline_color: Color,
    pub outline_scale: f64,
}

impl StrokeCommand {
    pub fn outline_width(&self, point: &PathPoint) -> f64 {
        point.radius * self.outline_scale
    }
}

/// Drives the pen and decides which part of each new segment gets drawn.
pub struct SheetModel {
    pen: Pen,
    portion: Portion,
    outline_color: Color,
    outline_scale: f64,
    stroke_timer: Option<ScopeTimer>,
}

impl SheetModel {
    pub fn new(pen: Pen, outline_color: Color, outline_scale: f64) -> Self {
        Self {
            pen,
            portion: Portion::All,
            outline_color,
            outline_scale,
            stroke_timer: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let pen = Pen::new(settings.pen_color()?, settings.solver());
        Ok(Self::new(
            pen,
            settings.outline_color()?,
            settings.pen.outline_scale,
        ))
    }

    pub fn pen_down(&mut self) {
        self.pen.down();
        self.portion = Portion::LatterHalf;
        self.stroke_timer = Some(ScopeTimer::new("stroke"));
        log::debug!("pen down");
    }

    pub fn pen_up(&mut self) {
        self.pen.up();
        self.portion = Portion::FirstHalf;
        self.stroke_timer.take();
        log::debug!(
            "pen up ({} segments fell back to straight lines so far)",
            self.pen.non_converged()
        );
    }

    /// Feed a pointer position and return what should be drawn, if anything.
    pub fn pen_move(&mut self, x: f64, y: f64) -> Option<StrokeCommand> {
        self.pen.move_to(x, y);
        self.update()
    }

    fn update(&mut self) -> Option<StrokeCommand> {
        let portion = if self.pen.is_down() {
            let drawn = match self.portion {
                Portion::All | Portion::LatterHalf => Some(self.portion),
                Portion::FirstHalf => None,
            };
            self.portion = Portion::All;
            drawn
        } else if self.portion == Portion::FirstHalf {
            self.portion = Portion::All;
            Some(Portion::FirstHalf)
        } else {
            None
        }?;

        let points = portion.select(self.pen.path());
        if points.is_empty() {
            return None;
        }
        Some(StrokeCommand {
            points: points.to_vec(),
            color: self.pen.color,
            outline_color: self.outline_color,
            outline_scale: self.outline_scale,
        })
    }

    pub fn portion(&self) -> Portion {
        self.portion
    }

    pub fn current_path(&self) -> &[PathPoint] {
        self.pen.path()
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn set_color(&mut self, color: Color) {
        log::debug!("pen color set to {:?}", color);
        self.pen.color = color;
    }

    /// Segments drawn as straight lines because the solver gave up.
    pub fn non_converged(&self) -> usize {
        self.pen.non_converged()
    }
}
