#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Kinematic interpolation with speed-dependent width.
    Pen,
    /// Tangent-intersection quadratic curve through the stroke's points.
    Curve,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Curve => "Curve",
        }
    }
}
