use lazy_static::lazy_static;
use regex::Regex;

use crate::{parser::ParseError, types::ClockTime};

lazy_static! {
    static ref RE_CLOCK_TIME: Regex = Regex::new(r"^(\d{1,2}):(\d{1,2}) (AM|PM)$").unwrap();
}

/// Parse a 12-hour clock string such as `"1:30 PM"` into 24-hour form.
pub fn parse_time_string(time: &str) -> Result<ClockTime, ParseError> {
    let time = time.trim();
    let invalid = || ParseError::InvalidTimeString(time.to_owned());

    let captures = RE_CLOCK_TIME.captures(time).ok_or_else(invalid)?;
    let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
    let minute: u32 = captures[2].parse().map_err(|_| invalid())?;
    let is_pm = &captures[3] == "PM";

    // "13:00 PM" is contradictory, "13:00 AM" is read as 24-hour time
    if hour > 23 || minute > 59 || (is_pm && hour > 12) {
        return Err(invalid());
    }

    let hour = match (is_pm, hour) {
        (true, hour) => 12 + hour % 12,
        (false, 12) => 0,
        (false, hour) => hour,
    };
    ClockTime::new(hour, minute).ok_or_else(invalid)
}
