use crate::clock::time::Time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
}

/// Result of feeding one tick into the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; the tick is dropped.
    Ignored,
    /// One second elapsed; carries the new display value.
    Decremented(Time),
    /// The last second ran out and the countdown returned to Idle.
    Finished,
}

/// Per-second countdown state machine.
#[derive(Debug, Clone)]
pub struct Countdown {
    state: CountdownState,
    total_seconds: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            total_seconds: 0,
            remaining: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    #[cfg(test)]
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// What the flip clock should show for the current remaining count.
    pub fn display(&self) -> Time {
        Time::from_total_seconds(self.remaining)
    }

    /// Start counting down from `time`. The first second is consumed
    /// immediately, so a 10 s timer shows 00:00:09 right after starting.
    ///
    /// Returns the captured total, or `None` when already running or when
    /// `time` is zero.
    pub fn start(&mut self, time: Time) -> Option<u32> {
        if self.is_running() || time.is_zero() {
            return None;
        }
        self.total_seconds = time.total_seconds();
        self.remaining = self.total_seconds - 1;
        self.state = CountdownState::Running;
        Some(self.total_seconds)
    }

    pub fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Ignored;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            Tick::Decremented(self.display())
        } else {
            self.stop();
            Tick::Finished
        }
    }

    pub fn stop(&mut self) {
        self.state = CountdownState::Idle;
        self.total_seconds = 0;
        self.remaining = 0;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
