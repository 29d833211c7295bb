use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Wall-clock time of day in 24-hour form, to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    #[inline]
    pub fn to_naive_time(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
