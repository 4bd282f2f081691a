pub mod countdown;
pub mod time;

#[cfg(test)]
pub use countdown::CountdownState;
pub use countdown::{Countdown, Tick};
pub use time::{Field, Time};
