use std::time::{Duration, Instant};

use chrono::Utc;

use crate::clock::{Countdown, Field, Tick, Time};
use crate::flip::tween::Fade;
use crate::flip::ClockFace;
use crate::picker::TimePicker;
use crate::recents::{RecentEntry, RecentStore};

/// Opacity of controls that currently ignore input.
pub const DISABLED_OPACITY: f32 = 0.5;
const FADE_DURATION: Duration = Duration::from_millis(300);

/// Main screen controller: owns the countdown, picker, clock face and
/// recents, and applies every user action and tick to them.
pub struct Home {
    countdown: Countdown,
    picker: TimePicker,
    clock_time: Time,
    face: ClockFace,
    store: Box<dyn RecentStore>,
    recents: Vec<RecentEntry>,
    /// Picker and recents.
    input_fade: Fade,
    /// Start/reset button.
    button_fade: Fade,
}

impl Home {
    pub fn new(store: Box<dyn RecentStore>, flip_duration: Duration, now: Instant) -> Self {
        let recents = store.list_sorted_by_date_descending();
        let mut face = ClockFace::new(flip_duration);
        face.show(Time::ZERO, now);
        Self {
            countdown: Countdown::new(),
            picker: TimePicker::new(),
            clock_time: Time::ZERO,
            face,
            store,
            recents,
            input_fade: Fade::new(1.0, FADE_DURATION),
            button_fade: Fade::new(DISABLED_OPACITY, FADE_DURATION),
        }
    }

    // --- Queries ---

    #[cfg(test)]
    pub fn state(&self) -> crate::clock::CountdownState {
        self.countdown.state()
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn clock_time(&self) -> Time {
        self.clock_time
    }

    pub fn picker(&self) -> &TimePicker {
        &self.picker
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn recents(&self) -> &[RecentEntry] {
        &self.recents
    }

    /// Start/reset button is live while running, or when idle with a
    /// non-zero time to count down.
    pub fn can_toggle(&self) -> bool {
        self.is_running() || !self.clock_time.is_zero()
    }

    /// Picker and recents accept input only while idle.
    pub fn is_editable(&self) -> bool {
        !self.is_running()
    }

    pub fn is_animating(&self) -> bool {
        self.face.is_flipping()
            || self.picker.is_settling()
            || self.input_fade.is_animating()
            || self.button_fade.is_animating()
    }

    pub fn input_opacity(&self, now: Instant) -> f32 {
        self.input_fade.value(now)
    }

    pub fn button_opacity(&self, now: Instant) -> f32 {
        self.button_fade.value(now)
    }

    // --- Picker ---

    pub fn set_field(&mut self, field: Field, value: u32, now: Instant) {
        if !self.is_editable() {
            return;
        }
        let time = self.picker.set(field, value);
        self.show(time, now);
    }

    pub fn step_field(&mut self, field: Field, delta: i32, now: Instant) {
        if !self.is_editable() || delta == 0 {
            return;
        }
        let time = self.picker.step(field, delta);
        self.show(time, now);
    }

    // --- Countdown ---

    /// Start when idle, reset when running.
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.reset(now);
        } else {
            self.start(now);
        }
    }

    /// Begin counting down the configured time. Records it as a recent
    /// unless an entry with the same total already exists.
    pub fn start(&mut self, now: Instant) -> bool {
        let time = self.clock_time;
        let Some(total) = self.countdown.start(time) else {
            return false;
        };
        tracing::info!(%time, total, "Idle -> Running");

        if !self.store.contains_total(total) {
            match self.store.insert(time, Utc::now()) {
                Ok(entry) => tracing::debug!(id = entry.id, label = %entry.label(), "recent recorded"),
                Err(e) => tracing::warn!("failed to record recent {time}: {e}"),
            }
            self.refresh_recents();
        }

        let display = self.countdown.display();
        self.show(display, now);
        true
    }

    pub fn tick(&mut self, now: Instant) {
        match self.countdown.tick() {
            Tick::Ignored => {}
            Tick::Decremented(time) => self.show(time, now),
            Tick::Finished => {
                tracing::info!("countdown finished");
                self.reset(now);
            }
        }
    }

    /// Return to Idle: clear the countdown and display, roll the picker
    /// back to zero.
    pub fn reset(&mut self, now: Instant) {
        if self.is_running() {
            tracing::info!(remaining = self.remaining(), "Running -> Idle");
        }
        self.countdown.stop();
        self.picker.reset(now);
        self.show(Time::ZERO, now);
    }

    // --- Recents ---

    /// Copy a recent entry into the picker.
    pub fn select_recent(&mut self, id: u64, now: Instant) {
        if !self.is_editable() {
            return;
        }
        let Some(entry) = self.recents.iter().find(|e| e.id == id) else {
            return;
        };
        let time = self.picker.set_time(entry.time());
        self.show(time, now);
    }

    pub fn delete_recent(&mut self, id: u64) {
        if !self.is_editable() {
            return;
        }
        match self.store.delete(id) {
            Ok(true) => tracing::debug!(id, "recent deleted"),
            Ok(false) => tracing::debug!(id, "recent already gone"),
            Err(e) => tracing::warn!("failed to delete recent {id}: {e}"),
        }
        self.refresh_recents();
    }

    // --- Animation ---

    pub fn advance(&mut self, now: Instant) {
        self.face.advance(now);
        self.picker.advance(now);
        self.input_fade.advance(now);
        self.button_fade.advance(now);
    }

    fn show(&mut self, time: Time, now: Instant) {
        self.clock_time = time;
        self.face.show(time, now);

        let opacity = |enabled: bool| if enabled { 1.0 } else { DISABLED_OPACITY };
        self.input_fade.set_target(opacity(self.is_editable()), now);
        self.button_fade.set_target(opacity(self.can_toggle()), now);
    }

    fn refresh_recents(&mut self) {
        self.recents = self.store.list_sorted_by_date_descending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CountdownState;
    use crate::flip::DEFAULT_FLIP_DURATION;
    use crate::recents::{JsonStore, MemoryStore};
    use chrono::TimeZone;

    fn home() -> (Home, Instant) {
        let now = Instant::now();
        (Home::new(Box::new(MemoryStore::new()), DEFAULT_FLIP_DURATION, now), now)
    }

    fn pick(home: &mut Home, time: Time, now: Instant) {
        home.set_field(Field::Hour, time.hour, now);
        home.set_field(Field::Minute, time.minute, now);
        home.set_field(Field::Second, time.second, now);
    }

    #[test]
    fn starts_idle_with_zero_face() {
        let (home, _) = home();
        assert_eq!(home.state(), CountdownState::Idle);
        assert_eq!(home.clock_time(), Time::ZERO);
        assert!(!home.face().is_flipping());
        assert!(!home.can_toggle());
    }

    #[test]
    fn zero_time_cannot_start() {
        let (mut home, now) = home();
        assert!(!home.can_toggle());
        assert!(!home.start(now));
        home.toggle(now);
        assert_eq!(home.state(), CountdownState::Idle);
        assert!(home.recents().is_empty());
    }

    #[test]
    fn picker_edits_drive_the_face() {
        let (mut home, now) = home();
        home.set_field(Field::Minute, 5, now);
        assert_eq!(home.clock_time(), Time::new(0, 5, 0));
        assert!(home.face().minute.is_flipping());
        assert_eq!(home.face().minute.incoming(), 5);
        assert!(home.can_toggle());
    }

    #[test]
    fn start_records_recent_and_shows_first_second_consumed() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 1, 0), now);
        assert!(home.start(now));
        assert!(home.is_running());
        assert_eq!(home.remaining(), 59);
        assert_eq!(home.clock_time(), Time::new(0, 0, 59));
        assert_eq!(home.recents().len(), 1);
        assert_eq!(home.recents()[0].time(), Time::new(0, 1, 0));
        assert!(!home.is_editable());
    }

    #[test]
    fn ticks_follow_modular_decomposition() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(1, 0, 2), now);
        home.start(now);
        let total = 3602;
        for k in 1..=5u32 {
            home.tick(now + Duration::from_secs(k as u64));
            let v = total - 1 - k;
            assert_eq!(home.remaining(), v);
            assert_eq!(home.clock_time(), Time::from_total_seconds(v));
        }
        assert_eq!(home.clock_time(), Time::new(0, 59, 56));
    }

    #[test]
    fn countdown_returns_to_idle_after_total_ticks() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 0, 3), now);
        home.start(now);
        for k in 1..=3u64 {
            home.tick(now + Duration::from_secs(k));
        }
        assert_eq!(home.state(), CountdownState::Idle);
        assert_eq!(home.remaining(), 0);
        assert_eq!(home.clock_time(), Time::ZERO);
        assert_eq!(home.picker().time(), Time::ZERO);
        assert!(home.picker().is_settling());
    }

    #[test]
    fn duplicate_total_is_not_recorded_again() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 1, 30), now);
        home.start(now);
        home.reset(now);

        // same breakdown
        pick(&mut home, Time::new(0, 1, 30), now);
        home.start(now);
        home.reset(now);
        assert_eq!(home.recents().len(), 1);

        pick(&mut home, Time::new(0, 2, 0), now);
        home.start(now);
        assert_eq!(home.recents().len(), 2);
    }

    #[test]
    fn same_total_different_breakdown_is_deduplicated() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 1, 0), now);
        home.start(now);
        home.reset(now);
        pick(&mut home, Time::new(0, 0, 60), now);
        home.start(now);
        assert_eq!(home.recents().len(), 1);
        assert_eq!(home.recents()[0].time(), Time::new(0, 1, 0));
    }

    #[test]
    fn existing_store_entries_count_for_dedup() {
        let now = Instant::now();
        let mut store = MemoryStore::new();
        let old = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        store.insert(Time::new(0, 5, 0), old).unwrap();
        let mut home = Home::new(Box::new(store), DEFAULT_FLIP_DURATION, now);
        assert_eq!(home.recents().len(), 1);

        home.set_field(Field::Minute, 5, now);
        home.start(now);
        assert_eq!(home.recents().len(), 1);
    }

    #[test]
    fn newest_recent_comes_first() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 0, 45), now);
        home.start(now);
        home.reset(now);
        pick(&mut home, Time::new(2, 0, 0), now);
        home.start(now);
        let labels: Vec<String> = home.recents().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["2h", "45S"]);
    }

    #[test]
    fn running_blocks_picker_and_recents() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 3, 0), now);
        home.start(now);
        let id = home.recents()[0].id;

        home.set_field(Field::Hour, 4, now);
        home.step_field(Field::Second, 1, now);
        home.select_recent(id, now);
        home.delete_recent(id);

        assert_eq!(home.picker().time(), Time::new(0, 3, 0));
        assert_eq!(home.clock_time(), Time::new(0, 2, 59));
        assert_eq!(home.recents().len(), 1);
    }

    #[test]
    fn select_and_delete_recent_when_idle() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(1, 30, 0), now);
        home.start(now);
        home.toggle(now);
        assert_eq!(home.state(), CountdownState::Idle);
        assert_eq!(home.picker().time(), Time::ZERO);

        let id = home.recents()[0].id;
        home.select_recent(id, now);
        assert_eq!(home.picker().time(), Time::new(1, 30, 0));
        assert_eq!(home.clock_time(), Time::new(1, 30, 0));
        assert!(!home.picker().is_settling());

        home.delete_recent(id);
        assert!(home.recents().is_empty());
        home.select_recent(id, now);
        assert_eq!(home.picker().time(), Time::new(1, 30, 0));
    }

    #[test]
    fn reset_does_not_cut_flips_short() {
        let (mut home, now) = home();
        pick(&mut home, Time::new(0, 0, 10), now);
        home.advance(now + DEFAULT_FLIP_DURATION);
        home.start(now + Duration::from_secs(1));
        assert!(home.face().second.is_flipping());
        home.reset(now + Duration::from_millis(1200));
        assert!(home.face().second.is_flipping());
        assert_eq!(home.face().second.displayed(), 0);

        home.advance(now + Duration::from_secs(3));
        assert!(!home.is_animating());
        assert_eq!(home.face().second.displayed(), 0);
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "flip-timer-screen-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn hand_edited_oversized_entry_does_not_break_start() {
        let dir = scratch_dir("oversized");
        let path = dir.join("recents.json");
        std::fs::write(
            &path,
            r#"[{"id": 7, "hour": 2000000, "minute": 0, "second": 0, "date": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        let store = JsonStore::open(&path).unwrap();
        let now = Instant::now();
        let mut home = Home::new(Box::new(store), DEFAULT_FLIP_DURATION, now);
        assert!(home.recents().is_empty());

        home.step_field(Field::Second, 1, now);
        assert!(home.start(now));
        assert!(home.is_running());
        assert_eq!(home.recents().len(), 1);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn store_write_failure_still_starts_countdown() {
        let dir = scratch_dir("unwritable");
        let parent = dir.join("data");
        let store = JsonStore::open(parent.join("recents.json")).unwrap();
        std::fs::write(&parent, "").unwrap();
        let now = Instant::now();
        let mut home = Home::new(Box::new(store), DEFAULT_FLIP_DURATION, now);

        pick(&mut home, Time::new(0, 2, 0), now);
        assert!(home.start(now));
        assert_eq!(home.state(), CountdownState::Running);
        assert_eq!(home.recents().len(), 1);
        assert_eq!(home.recents()[0].time(), Time::new(0, 2, 0));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_controls_fade_rather_than_snap() {
        let (mut home, now) = home();
        assert_eq!(home.button_opacity(now), DISABLED_OPACITY);
        assert_eq!(home.input_opacity(now), 1.0);

        home.set_field(Field::Second, 5, now);
        assert!(home.button_opacity(now + FADE_DURATION / 2) > DISABLED_OPACITY);
        assert!(home.button_opacity(now + FADE_DURATION / 2) < 1.0);
        assert_eq!(home.button_opacity(now + FADE_DURATION), 1.0);

        let later = now + Duration::from_secs(1);
        home.advance(later);
        home.start(later);
        assert_eq!(home.input_opacity(later), 1.0);
        assert_eq!(home.input_opacity(later + FADE_DURATION), DISABLED_OPACITY);
        assert_eq!(home.button_opacity(later + FADE_DURATION), 1.0);

        home.advance(later + Duration::from_secs(1));
        assert!(!home.is_animating());
    }
}
