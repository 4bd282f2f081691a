use iced::mouse::ScrollDelta;

/// Two-digit clock text: values below 10 get a leading zero.
pub fn pad2(value: u32) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

/// Picker step for one wheel event: scrolling up counts up.
/// Returns 0 for purely horizontal scrolls.
pub fn scroll_step(delta: ScrollDelta) -> i32 {
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };
    if y > 0.0 {
        1
    } else if y < 0.0 {
        -1
    } else {
        0
    }
}
