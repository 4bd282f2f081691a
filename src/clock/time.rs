use std::fmt;

/// Which component of a [`Time`] a picker column or flip digit is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Hour, Field::Minute, Field::Second];

    /// Inclusive bounds of the picker column for this field.
    pub fn range(self) -> (u32, u32) {
        match self {
            Field::Hour => (0, 24),
            Field::Minute | Field::Second => (0, 60),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Hour => "hours",
            Field::Minute => "minutes",
            Field::Second => "seconds",
        }
    }
}

/// A countdown value split into clock components.
///
/// Components are not normalised against each other: the picker can
/// produce `0h 60m 60s`, and [`Time::total_seconds`] simply adds them up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Time {
    pub const ZERO: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Decompose a remaining second count into what the flip clock shows.
    /// Hours wrap at 24 so the face never needs a third hour digit.
    pub fn from_total_seconds(total: u32) -> Self {
        Self {
            hour: (total / 3600) % 24,
            minute: (total / 60) % 60,
            second: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Whether every component lies within its picker range. Anything
    /// the picker produces passes; a hand-edited recents file may not.
    pub fn is_in_range(&self) -> bool {
        Field::ALL.into_iter().all(|field| {
            let (min, max) = field.range();
            (min..=max).contains(&self.get(field))
        })
    }

    pub fn is_zero(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Hour => self.hour,
            Field::Minute => self.minute,
            Field::Second => self.second,
        }
    }

    pub fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::Hour => self.hour = value,
            Field::Minute => self.minute = value,
            Field::Second => self.second = value,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_seconds_over_full_picker_range() {
        for h in 0..=24 {
            for m in 0..=60 {
                for s in 0..=60 {
                    let t = Time::new(h, m, s);
                    assert_eq!(t.total_seconds(), h * 3600 + m * 60 + s);
                    assert_eq!(t.is_zero(), t.total_seconds() == 0);
                }
            }
        }
    }

    #[test]
    fn from_total_seconds_decomposes() {
        assert_eq!(Time::from_total_seconds(0), Time::ZERO);
        assert_eq!(Time::from_total_seconds(59), Time::new(0, 0, 59));
        assert_eq!(Time::from_total_seconds(3661), Time::new(1, 1, 1));
        assert_eq!(Time::from_total_seconds(5399), Time::new(1, 29, 59));
    }

    #[test]
    fn from_total_seconds_wraps_hours_at_24() {
        // 24h 0m 0s picked, minus the first second
        let t = Time::from_total_seconds(24 * 3600 - 1);
        assert_eq!(t, Time::new(23, 59, 59));
        assert_eq!(Time::from_total_seconds(24 * 3600), Time::ZERO);
        assert_eq!(Time::from_total_seconds(25 * 3600 + 5), Time::new(1, 0, 5));
    }

    #[test]
    fn unnormalised_components_still_add_up() {
        let t = Time::new(0, 60, 60);
        assert_eq!(t.total_seconds(), 3660);
        assert_eq!(Time::from_total_seconds(3660), Time::new(1, 1, 0));
    }

    #[test]
    fn field_accessors() {
        let mut t = Time::ZERO;
        t.set(Field::Minute, 5);
        t.set(Field::Second, 45);
        assert_eq!(t.get(Field::Hour), 0);
        assert_eq!(t.get(Field::Minute), 5);
        assert_eq!(t.get(Field::Second), 45);
        assert_eq!(t.to_string(), "00:05:45");
    }

    #[test]
    fn field_ranges() {
        assert_eq!(Field::Hour.range(), (0, 24));
        assert_eq!(Field::Minute.range(), (0, 60));
        assert_eq!(Field::Second.range(), (0, 60));
    }

    #[test]
    fn range_check_follows_picker_bounds() {
        assert!(Time::ZERO.is_in_range());
        assert!(Time::new(24, 60, 60).is_in_range());
        assert!(!Time::new(25, 0, 0).is_in_range());
        assert!(!Time::new(0, 0, 61).is_in_range());
        assert!(!Time::new(2_000_000, 0, 0).is_in_range());
    }
}
