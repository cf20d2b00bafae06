//! Count-up animation for the probability figure
//!
//! Driven by host frame timestamps (e.g. `requestAnimationFrame`), not a
//! fixed-interval timer. The clock starts on the first frame.
//!
//! The dashboard page replays the same curve in `dashboard/js.rs`
//! (`animateProbability`) from the serialized `from`/`to`/`duration_ms`;
//! keep the two easing formulas identical.

use serde::Serialize;

/// Default count-up duration
pub const DEFAULT_DURATION_MS: f64 = 1200.0;

/// Ease-out cubic from `from` to `to` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountUp {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    #[serde(skip)]
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            started_at: None,
        }
    }

    /// Count from zero to `target` over the default duration
    pub fn to_target(target: u8) -> Self {
        Self::new(0.0, f64::from(target), DEFAULT_DURATION_MS)
    }

    /// Value at `now_ms`; the first call pins the start time
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let start = *self.started_at.get_or_insert(now_ms);
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        match self.started_at {
            Some(start) => now_ms - start >= self.duration_ms,
            None => false,
        }
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Holds at most one running animation.
///
/// Starting a new animation supersedes the previous one.
#[derive(Debug, Default)]
pub struct AnimationSlot {
    active: Option<CountUp>,
}

impl AnimationSlot {
    pub fn start(&mut self, animation: CountUp) {
        self.active = Some(animation);
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Rounded frame value, or `None` when nothing is running.
    /// The final frame clears the slot.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        let animation = self.active.as_mut()?;
        let value = animation.sample(now_ms);
        if animation.is_finished(now_ms) {
            self.active = None;
        }
        Some(value.round().max(0.0) as u32)
    }
}
