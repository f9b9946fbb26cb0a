use super::history::{Axis, RingHistory, MIDDLE, NEWEST, OLDEST};

/// How the middle slot's velocity was obtained after a feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Estimate {
    /// Fewer than two samples so far.
    Insufficient,
    /// Only two samples: forward difference, not yet ready to interpolate.
    Forward,
    /// Three samples: central difference, the oldest/middle pair can be interpolated.
    Central,
}

impl Estimate {
    pub fn is_ready(self) -> bool {
        self == Estimate::Central
    }
}

/// Fill in the middle slot's velocity on both axes from its neighbours.
pub fn estimate_middle(ring: &mut RingHistory) -> Estimate {
    let (Some(middle), Some(newest)) = (ring.slot(MIDDLE).copied(), ring.slot(NEWEST).copied())
    else {
        return Estimate::Insufficient;
    };
    let oldest = ring.slot(OLDEST).copied();

    let mut estimate = Estimate::Insufficient;
    for axis in [Axis::X, Axis::Y] {
        let m = middle.axis(axis).position;
        let n = newest.axis(axis).position;
        let (velocity, kind) = match oldest {
            Some(o) => {
                let o = o.axis(axis).position;
                (0.5 * ((m - o) + (n - m)), Estimate::Central)
            }
            None => (n - m, Estimate::Forward),
        };
        if let Some(slot) = ring.slot_mut(MIDDLE) {
            slot.axis_mut(axis).velocity = Some(velocity);
        }
        estimate = kind;
    }
    estimate
}
