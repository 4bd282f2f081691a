pub mod digit;
pub mod tween;

pub use digit::{ClockFace, FlapSide, FlipDigit, DEFAULT_FLIP_DURATION};
