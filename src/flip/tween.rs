use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolates a value from `from` to `to` over a fixed duration.
///
/// The tween holds no clock of its own; callers pass `now` so that the
/// frame subscription and tests drive time explicitly.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// A scalar that eases towards whatever target it was last given.
/// Retargeting mid-way starts from the current value, so the motion
/// never jumps.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    target: f32,
    duration: Duration,
    tween: Option<Tween>,
}

impl Fade {
    pub fn new(value: f32, duration: Duration) -> Self {
        Self {
            target: value,
            duration,
            tween: None,
        }
    }

    pub fn set_target(&mut self, target: f32, now: Instant) {
        if target == self.target {
            return;
        }
        let from = self.value(now);
        self.target = target;
        self.tween = Some(Tween::new(from, target, now, self.duration, Easing::EaseInOut));
    }

    pub fn value(&self, now: Instant) -> f32 {
        self.tween.map_or(self.target, |tween| tween.value(now))
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn advance(&mut self, now: Instant) {
        if self.tween.is_some_and(|tween| tween.is_finished(now)) {
            self.tween = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_slow_at_edges() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn value_sweeps_between_endpoints() {
        let t0 = Instant::now();
        let tw = Tween::new(0.0, -180.0, t0, Duration::from_millis(800), Easing::EaseInOut);
        assert_eq!(tw.value(t0), 0.0);
        assert!((tw.value(t0 + Duration::from_millis(400)) + 90.0).abs() < 1e-3);
        assert_eq!(tw.value(t0 + Duration::from_millis(800)), -180.0);
        assert_eq!(tw.value(t0 + Duration::from_secs(5)), -180.0);
    }

    #[test]
    fn finished_only_after_duration() {
        let t0 = Instant::now();
        let tw = Tween::new(10.0, 0.0, t0, Duration::from_millis(300), Easing::Linear);
        assert!(!tw.is_finished(t0));
        assert!(!tw.is_finished(t0 + Duration::from_millis(299)));
        assert!(tw.is_finished(t0 + Duration::from_millis(300)));
        assert!((tw.value(t0 + Duration::from_millis(150)) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t0 = Instant::now();
        let tw = Tween::new(1.0, 2.0, t0, Duration::ZERO, Easing::Linear);
        assert!(tw.is_finished(t0));
        assert_eq!(tw.value(t0), 2.0);
    }

    #[test]
    fn fade_eases_to_new_target() {
        let t0 = Instant::now();
        let mut fade = Fade::new(1.0, Duration::from_millis(300));
        fade.set_target(1.0, t0);
        assert!(!fade.is_animating());

        fade.set_target(0.5, t0);
        assert!(fade.is_animating());
        assert_eq!(fade.value(t0), 1.0);
        assert!((fade.value(t0 + Duration::from_millis(150)) - 0.75).abs() < 1e-4);

        fade.advance(t0 + Duration::from_millis(300));
        assert!(!fade.is_animating());
        assert_eq!(fade.value(t0 + Duration::from_millis(300)), 0.5);
    }

    #[test]
    fn fade_retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut fade = Fade::new(1.0, Duration::from_millis(300));
        fade.set_target(0.5, t0);
        let mid = t0 + Duration::from_millis(150);
        fade.set_target(1.0, mid);
        assert!((fade.value(mid) - 0.75).abs() < 1e-4);
        assert_eq!(fade.value(mid + Duration::from_millis(300)), 1.0);
    }
}
