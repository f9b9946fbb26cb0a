use super::painter::ScratchpadApp;
use crate::utils::vector::{distance, lerp, Vec2};
use eframe::egui;
use std::time::{Duration, Instant};

/// Exponential pointer smoothing whose lag vanishes for fast motion: a move of
/// `follow_distance` or more is taken as-is.
#[derive(Clone, Debug)]
pub struct MotionFilter {
    follow_distance: f64,
    last: Option<Vec2>,
}

impl MotionFilter {
    pub fn new(follow_distance: f64) -> Self {
        Self {
            follow_distance,
            last: None,
        }
    }

    pub fn filter(&mut self, raw: Vec2) -> Vec2 {
        let next = match self.last {
            None => raw,
            Some(prev) => {
                let alpha = (distance(prev, raw) / self.follow_distance).min(1.0);
                lerp(alpha, raw, prev)
            }
        };
        self.last = Some(next);
        next
    }
}

/// Remembers the last raw motion so it can be replayed when input goes quiet,
/// letting the filtered position catch up with a pointer that stopped.
#[derive(Clone, Debug)]
pub struct TickRelay {
    interval: Duration,
    last: Option<(Vec2, Instant)>,
}

impl TickRelay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn record(&mut self, raw: Vec2, now: Instant) {
        self.last = Some((raw, now));
    }

    /// The motion to replay, if the last one is older than the interval.
    pub fn due(&self, now: Instant) -> Option<Vec2> {
        let (raw, at) = self.last?;
        (now.saturating_duration_since(at) > self.interval).then_some(raw)
    }
}

/// Raw pointer positions in, filtered positions out.
#[derive(Clone, Debug)]
pub struct PointerInput {
    filter: MotionFilter,
    relay: TickRelay,
}

impl PointerInput {
    pub fn new(follow_distance: f64, tick_interval: Duration) -> Self {
        Self {
            filter: MotionFilter::new(follow_distance),
            relay: TickRelay::new(tick_interval),
        }
    }

    pub fn motion(&mut self, raw: Vec2, now: Instant) -> Vec2 {
        self.relay.record(raw, now);
        self.filter.filter(raw)
    }

    pub fn tick(&mut self, now: Instant) -> Option<Vec2> {
        let raw = self.relay.due(now)?;
        Some(self.motion(raw, now))
    }
}

/// Offset putting pointer samples on pixel centres.
const PIXEL_CENTRE: f64 = 0.5;

fn to_sheet(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(
        (pos.x - origin.x) as f64 + PIXEL_CENTRE,
        (pos.y - origin.y) as f64 + PIXEL_CENTRE,
    )
}

/// Route this frame's pointer events to the active tool.
pub fn handle_input(app: &mut ScratchpadApp, ctx: &egui::Context, response: &egui::Response) {
    let origin = response.rect.min;
    let now = Instant::now();
    let events = ctx.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let sheet_pos = to_sheet(pos, origin);
                match button {
                    egui::PointerButton::Primary => {
                        if pressed && response.hovered() {
                            app.press(sheet_pos);
                        } else if !pressed {
                            app.release(sheet_pos);
                        }
                    }
                    // Only while lifted, so a stray click mid-stroke does not wipe the sheet.
                    egui::PointerButton::Middle if pressed && !app.is_pen_down() => app.clear(),
                    _ => {}
                }
            }
            egui::Event::PointerMoved(pos) => app.motion(to_sheet(pos, origin), now),
            _ => {}
        }
    }

    app.tick(now);
}
