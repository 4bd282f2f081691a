use std::time::{Duration, Instant};

use crate::clock::{Field, Time};
use crate::flip::tween::{Easing, Tween};

pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(800);

/// Flap angle at the end of a flip, in degrees.
const FLIP_END_ANGLE: f32 = -180.0;

/// Which face of the moving flap is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapSide {
    /// Upper half of the outgoing value, folding down towards the seam.
    Front,
    /// Lower half of the incoming value, falling onto the bottom card.
    Back,
}

/// One split-flap digit pair ("00".."99").
///
/// The static top half always shows `incoming`, the static bottom half
/// shows `displayed`, and the flap in between sweeps from 0 to -180
/// degrees while a flip is in flight.
#[derive(Debug, Clone)]
pub struct FlipDigit {
    displayed: u32,
    incoming: u32,
    target: u32,
    flip: Option<Tween>,
    settled: bool,
    duration: Duration,
}

impl FlipDigit {
    pub fn new(duration: Duration) -> Self {
        Self {
            displayed: 0,
            incoming: 0,
            target: 0,
            flip: None,
            settled: false,
            duration,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn incoming(&self) -> u32 {
        self.incoming
    }

    #[cfg(test)]
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_flipping(&self) -> bool {
        self.flip.is_some()
    }

    /// Point the digit at a new value.
    ///
    /// The first call settles without animating. A change while a flip is
    /// already in flight is committed straight away; the running flip is
    /// neither restarted nor queued.
    pub fn set_target(&mut self, value: u32, now: Instant) {
        if !self.settled {
            self.settled = true;
            self.displayed = value;
            self.incoming = value;
            self.target = value;
            return;
        }

        let old = self.target;
        self.target = value;
        self.displayed = old;
        self.incoming = value;

        if self.flip.is_some() {
            self.displayed = value;
            return;
        }
        if old == value {
            return;
        }

        self.flip = Some(Tween::new(
            0.0,
            FLIP_END_ANGLE,
            now,
            self.duration,
            Easing::EaseInOut,
        ));
    }

    /// Advance the flip to `now`. Returns true when a flip completed.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.flip {
            Some(tween) if tween.is_finished(now) => {
                self.flip = None;
                self.displayed = self.target;
                true
            }
            _ => false,
        }
    }

    /// Current flap angle in degrees, within [-180, 0]; 0 at rest.
    pub fn rotation(&self, now: Instant) -> f32 {
        self.flip.map_or(0.0, |tween| tween.value(now))
    }

    pub fn flap_side(&self, now: Instant) -> FlapSide {
        if -self.rotation(now) > 90.0 {
            FlapSide::Back
        } else {
            FlapSide::Front
        }
    }

    /// Value printed on the visible face of the flap.
    pub fn flap_value(&self, now: Instant) -> u32 {
        match self.flap_side(now) {
            FlapSide::Front => self.displayed,
            FlapSide::Back => self.incoming,
        }
    }
}

/// The three digits of the clock face, shared by the portrait and
/// landscape layouts.
#[derive(Debug, Clone)]
pub struct ClockFace {
    pub hour: FlipDigit,
    pub minute: FlipDigit,
    pub second: FlipDigit,
}

impl ClockFace {
    pub fn new(duration: Duration) -> Self {
        Self {
            hour: FlipDigit::new(duration),
            minute: FlipDigit::new(duration),
            second: FlipDigit::new(duration),
        }
    }

    pub fn show(&mut self, time: Time, now: Instant) {
        self.hour.set_target(time.hour, now);
        self.minute.set_target(time.minute, now);
        self.second.set_target(time.second, now);
    }

    pub fn advance(&mut self, now: Instant) {
        self.hour.advance(now);
        self.minute.advance(now);
        self.second.advance(now);
    }

    pub fn is_flipping(&self) -> bool {
        self.hour.is_flipping() || self.minute.is_flipping() || self.second.is_flipping()
    }

    pub fn digit(&self, field: Field) -> &FlipDigit {
        match field {
            Field::Hour => &self.hour,
            Field::Minute => &self.minute,
            Field::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_assignment_settles_without_flip() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(DEFAULT_FLIP_DURATION);
        d.set_target(42, t0);
        assert!(!d.is_flipping());
        assert_eq!(d.displayed(), 42);
        assert_eq!(d.incoming(), 42);
        assert_eq!(d.rotation(t0), 0.0);
    }

    #[test]
    fn same_value_does_not_flip() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(DEFAULT_FLIP_DURATION);
        d.set_target(7, t0);
        d.set_target(7, t0 + ms(10));
        assert!(!d.is_flipping());
        assert_eq!(d.displayed(), 7);
    }

    #[test]
    fn change_flips_and_settles_on_new_value() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(DEFAULT_FLIP_DURATION);
        d.set_target(5, t0);
        d.set_target(4, t0);
        assert!(d.is_flipping());
        assert_eq!(d.displayed(), 5);
        assert_eq!(d.incoming(), 4);

        assert!(!d.advance(t0 + ms(400)));
        let mid = d.rotation(t0 + ms(400));
        assert!(mid < 0.0 && mid >= -180.0);

        assert!(d.advance(t0 + ms(800)));
        assert!(!d.is_flipping());
        assert_eq!(d.displayed(), 4);
        assert_eq!(d.rotation(t0 + ms(800)), 0.0);
    }

    #[test]
    fn flap_turns_over_past_ninety_degrees() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(DEFAULT_FLIP_DURATION);
        d.set_target(10, t0);
        d.set_target(9, t0);
        assert_eq!(d.flap_side(t0 + ms(100)), FlapSide::Front);
        assert_eq!(d.flap_value(t0 + ms(100)), 10);
        assert_eq!(d.flap_side(t0 + ms(700)), FlapSide::Back);
        assert_eq!(d.flap_value(t0 + ms(700)), 9);
    }

    #[test]
    fn change_during_flip_commits_immediately() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(DEFAULT_FLIP_DURATION);
        d.set_target(3, t0);
        d.set_target(2, t0);
        let before = d.rotation(t0 + ms(300));

        d.set_target(1, t0 + ms(300));
        assert_eq!(d.displayed(), 1);
        assert_eq!(d.incoming(), 1);
        // progress is not restarted
        assert_eq!(d.rotation(t0 + ms(300)), before);
        assert!(d.is_flipping());

        assert!(!d.advance(t0 + ms(799)));
        assert!(d.advance(t0 + ms(800)));
        assert_eq!(d.displayed(), 1);
        assert_eq!(d.rotation(t0 + ms(900)), 0.0);
    }

    #[test]
    fn next_change_after_completion_flips_again() {
        let t0 = Instant::now();
        let mut d = FlipDigit::new(ms(100));
        d.set_target(59, t0);
        d.set_target(58, t0);
        d.advance(t0 + ms(100));
        d.set_target(57, t0 + ms(1000));
        assert!(d.is_flipping());
        assert_eq!(d.displayed(), 58);
        assert_eq!(d.incoming(), 57);
    }

    #[test]
    fn clock_face_routes_fields() {
        let t0 = Instant::now();
        let mut face = ClockFace::new(DEFAULT_FLIP_DURATION);
        face.show(Time::ZERO, t0);
        assert!(!face.is_flipping());

        face.show(Time::new(0, 1, 30), t0);
        assert!(!face.hour.is_flipping());
        assert!(face.minute.is_flipping());
        assert!(face.second.is_flipping());
        assert_eq!(face.digit(Field::Second).incoming(), 30);

        face.advance(t0 + DEFAULT_FLIP_DURATION);
        assert!(!face.is_flipping());
        assert_eq!(face.digit(Field::Minute).displayed(), 1);
    }
}
