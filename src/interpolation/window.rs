use super::sampler::PathPoint;

/// Which part of the latest interpolated segment the next update should draw.
///
/// Interpolation always trails one sample behind the pointer, so the segment
/// produced right after contact still carries pre-contact motion, and the one
/// flushed after release carries post-release motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Portion {
    #[default]
    All,
    /// Points 5..=10, used on the first update after pen-down.
    LatterHalf,
    /// Points 0..=4, used on the flush after pen-up.
    FirstHalf,
}

impl Portion {
    /// The slice of `path` this portion covers; empty if the path is too short.
    pub fn select(self, path: &[PathPoint]) -> &[PathPoint] {
        let range = match self {
            Portion::All => return path,
            Portion::LatterHalf => path.get(5..=10),
            Portion::FirstHalf => path.get(0..=4),
        };
        range.unwrap_or(&[])
    }
}
