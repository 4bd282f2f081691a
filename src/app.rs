use std::time::Instant;

use iced::{window, Color, Element, Size, Subscription, Task};

use crate::cli::Config;
use crate::clock::Field;
use crate::recents::{JsonStore, MemoryStore, RecentStore};
use crate::screen::Home;
use crate::theme::{self, ThemeColors, ThemeMode};
use crate::ticker;

const APP_TITLE: &str = "Flip Timer";
const INITIAL_WINDOW: Size = Size {
    width: 420.0,
    height: 780.0,
};

// --- App State ---

pub(crate) struct TimerApp {
    pub(crate) home: Home,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) colors: ThemeColors,
    pub(crate) window_size: Size,
    /// Timestamp of the last frame; the canvas draws flips at this instant.
    pub(crate) now: Instant,
}

impl TimerApp {
    /// Wider than tall: show only the digits.
    pub(crate) fn is_landscape(&self) -> bool {
        self.window_size.width > self.window_size.height
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    PickerStep(Field, i32),
    PickerSet(Field, u32),
    ToggleCountdown,
    SelectRecent(u64),
    DeleteRecent(u64),
    CountdownTick,
    Frame(Instant),
    WindowResized(Size),
    ThemeRefresh,
}

pub(crate) fn run(config: Config) -> iced::Result {
    tracing::info!(
        "v{} ({}) starting",
        env!("FLIP_TIMER_VERSION"),
        env!("FLIP_TIMER_COMMIT")
    );

    iced::application(move || TimerApp::new(&config), TimerApp::update, TimerApp::view)
        .title(TimerApp::title)
        .style(TimerApp::style)
        .subscription(TimerApp::subscription)
        .window_size(INITIAL_WINDOW)
        .run()
}

/// The remaining time leads the title while counting down, so it stays
/// readable from a taskbar.
fn window_title(home: &Home) -> String {
    if home.is_running() {
        format!("{} - {APP_TITLE}", home.clock_time())
    } else {
        APP_TITLE.to_string()
    }
}

fn open_store(config: &Config) -> Box<dyn RecentStore> {
    if config.ephemeral {
        tracing::info!("recents: in-memory only (--ephemeral)");
        return Box::new(MemoryStore::new());
    }
    let path = config.store_path();
    match JsonStore::open(&path) {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "recents: persisted");
            Box::new(store)
        }
        Err(e) => {
            // Leave the unreadable file alone rather than overwrite it.
            tracing::error!("{e}; recents will not be saved this session");
            Box::new(MemoryStore::new())
        }
    }
}

impl TimerApp {
    fn new(config: &Config) -> (Self, Task<Message>) {
        let now = Instant::now();
        let theme_mode = config.theme;
        let colors = theme::resolve(theme_mode);
        tracing::info!(
            theme = ?theme_mode,
            flip_ms = config.flip_duration().as_millis() as u64,
            "booting"
        );

        let home = Home::new(open_store(config), config.flip_duration(), now);
        (
            Self {
                home,
                theme_mode,
                colors,
                window_size: INITIAL_WINDOW,
                now,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        self.now = now;
        match message {
            Message::PickerStep(field, delta) => {
                self.home.step_field(field, delta, now);
            }
            Message::PickerSet(field, value) => {
                self.home.set_field(field, value, now);
            }
            Message::ToggleCountdown => {
                if self.home.can_toggle() {
                    self.home.toggle(now);
                }
            }
            Message::SelectRecent(id) => {
                self.home.select_recent(id, now);
            }
            Message::DeleteRecent(id) => {
                self.home.delete_recent(id);
            }
            Message::CountdownTick => {
                self.home.tick(now);
            }
            Message::Frame(at) => {
                self.now = at.max(now);
                self.home.advance(self.now);
            }
            Message::WindowResized(size) => {
                let was_landscape = self.is_landscape();
                self.window_size = size;
                if was_landscape != self.is_landscape() {
                    tracing::debug!(
                        "layout -> {}",
                        if self.is_landscape() { "landscape" } else { "portrait" }
                    );
                }
            }
            Message::ThemeRefresh => {
                if self.theme_mode == ThemeMode::Auto {
                    let dark = theme::detect_system_dark();
                    if dark != self.colors.is_dark {
                        self.colors = if dark { ThemeColors::dark() } else { ThemeColors::light() };
                        tracing::info!("auto theme: switched to {}", if dark { "dark" } else { "light" });
                    }
                }
            }
        }
        Task::none()
    }

    fn title(&self) -> String {
        window_title(&self.home)
    }

    fn view(&self) -> Element<'_, Message> {
        if self.is_landscape() {
            self.view_landscape()
        } else {
            self.view_home()
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        // Dropping the countdown subscription while idle cancels its ticks.
        if self.home.is_running() {
            subs.push(Subscription::run_with(
                ticker::COUNTDOWN_TICK_MS,
                ticker::countdown_stream,
            ));
        }

        if self.home.is_animating() {
            subs.push(Subscription::run_with(ticker::FRAME_MS, ticker::frame_stream));
        }

        if self.theme_mode == ThemeMode::Auto {
            subs.push(Subscription::run(ticker::theme_refresh_stream));
        }

        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.colors.background,
            text_color: if self.colors.is_dark { Color::WHITE } else { Color::BLACK },
        }
    }
}
