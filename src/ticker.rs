use std::time::{Duration, Instant};

use futures::channel::mpsc;

use crate::app::Message;

/// Interval between countdown ticks while running.
pub(crate) const COUNTDOWN_TICK_MS: u64 = 1000;

/// Interval between animation frames while a flip, settle or fade is in flight.
pub(crate) const FRAME_MS: u64 = 16;

/// How often `ThemeMode::Auto` re-checks the desktop color scheme.
const THEME_REFRESH: Duration = Duration::from_secs(5);

/// Emit `make()` every `period` from a sleeping thread. The thread ends
/// once iced drops the receiver, i.e. when the subscription is no longer
/// requested.
fn interval_stream(period: Duration, make: fn() -> Message) -> mpsc::UnboundedReceiver<Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(period);
        if tx.unbounded_send(make()).is_err() {
            break;
        }
    });
    rx
}

pub(crate) fn countdown_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    interval_stream(Duration::from_millis(*ms), || Message::CountdownTick)
}

pub(crate) fn frame_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    interval_stream(Duration::from_millis(*ms), || Message::Frame(Instant::now()))
}

pub(crate) fn theme_refresh_stream() -> mpsc::UnboundedReceiver<Message> {
    interval_stream(THEME_REFRESH, || Message::ThemeRefresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn interval_stream_repeats_until_dropped() {
        let mut rx = interval_stream(Duration::from_millis(1), || Message::CountdownTick);
        for _ in 0..3 {
            let next = futures::executor::block_on(rx.next());
            assert!(matches!(next, Some(Message::CountdownTick)));
        }
    }
}
