use std::time::{Duration, Instant};

use crate::clock::{Field, Time};
use crate::flip::tween::{Easing, Tween};

/// How long the columns take to roll back to zero after a reset.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Three bounded selectors bound to one composite [`Time`].
#[derive(Debug, Clone, Default)]
pub struct TimePicker {
    time: Time,
    /// Linear roll-back to zero; the origin is what the columns showed.
    settle: Option<(Time, Tween)>,
}

impl TimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn time(&self) -> Time {
        self.time
    }

    /// Set one field, clamped to its range. Returns the new composite time.
    pub fn set(&mut self, field: Field, value: u32) -> Time {
        let (lo, hi) = field.range();
        self.settle = None;
        self.time.set(field, value.clamp(lo, hi));
        self.time
    }

    /// Move one field by `delta`, stopping at the range ends.
    pub fn step(&mut self, field: Field, delta: i32) -> Time {
        let current = self.time.get(field) as i64;
        let next = (current + delta as i64).max(0) as u32;
        self.set(field, next)
    }

    /// Replace all three fields at once, each clamped.
    pub fn set_time(&mut self, time: Time) -> Time {
        for field in Field::ALL {
            self.set(field, time.get(field));
        }
        self.time
    }

    /// Zero the bound value immediately and roll the columns back over
    /// [`SETTLE_DURATION`].
    pub fn reset(&mut self, now: Instant) {
        let from = self.time;
        self.time = Time::ZERO;
        self.settle = if from.is_zero() {
            None
        } else {
            Some((
                from,
                Tween::new(1.0, 0.0, now, SETTLE_DURATION, Easing::Linear),
            ))
        };
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn advance(&mut self, now: Instant) {
        if let Some((_, tween)) = self.settle {
            if tween.is_finished(now) {
                self.settle = None;
            }
        }
    }

    /// Value a column shows right now; differs from [`Self::time`] only
    /// while settling.
    pub fn displayed(&self, field: Field, now: Instant) -> u32 {
        match self.settle {
            Some((from, tween)) => {
                let origin = from.get(field) as f32;
                (origin * tween.value(now)).round() as u32
            }
            None => self.time.get(field),
        }
    }
}

/// Value `offset` rows away from `center` on a wheel for `field`, or
/// `None` past either end of the range.
pub fn wheel_value(field: Field, center: u32, offset: i32) -> Option<u32> {
    let (min, max) = field.range();
    let value = i64::from(center) + i64::from(offset);
    (i64::from(min)..=i64::from(max))
        .contains(&value)
        .then(|| value as u32)
}
