/// One raw pointer observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub down: bool,
}

impl Sample {
    pub fn new(x: f64, y: f64, down: bool) -> Self {
        Self { x, y, down }
    }
}

/// Position along one axis plus the velocity estimated for it, once known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSlot {
    pub position: f64,
    pub velocity: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistorySlot {
    pub x: AxisSlot,
    pub y: AxisSlot,
    pub down: bool,
}

impl From<Sample> for HistorySlot {
    fn from(sample: Sample) -> Self {
        Self {
            x: AxisSlot {
                position: sample.x,
                velocity: None,
            },
            y: AxisSlot {
                position: sample.y,
                velocity: None,
            },
            down: sample.down,
        }
    }
}

/// Selects one axis of a slot so x and y can share the same code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl HistorySlot {
    pub fn axis(&self, axis: Axis) -> &AxisSlot {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSlot {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

pub const OLDEST: usize = 0;
pub const MIDDLE: usize = 1;
pub const NEWEST: usize = 2;

/// The three most recent samples, oldest first. Slots stay `None` until enough
/// samples have been fed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingHistory {
    slots: [Option<HistorySlot>; 3],
}

impl RingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the oldest slot and append `sample` as the newest.
    pub fn feed(&mut self, sample: Sample) {
        self.slots.rotate_left(1);
        self.slots[NEWEST] = Some(sample.into());
    }

    pub fn slot(&self, index: usize) -> Option<&HistorySlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut HistorySlot> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub fn slots(&self) -> &[Option<HistorySlot>; 3] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots = [None; 3];
    }
}
