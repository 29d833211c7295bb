//! Decomposition of the semi-structured text cells.

use itertools::Itertools;

use crate::{
    grid::CellValue,
    parser::{ParseError, parse_time_string},
    types::{ClockTime, Weekday},
};

const PATTERN_DELIMITER: char = '|';
const RANGE_DELIMITER: char = '-';

/// A course listing split into its id and full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName {
    pub id: String,
    pub full_name: String,
}

/// The parts of a meeting pattern like `"M-W-F | 9:00 AM - 9:50 AM | Hall 101"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingPattern {
    pub days: Vec<Weekday>,
    pub start: ClockTime,
    pub end: ClockTime,
    pub location: String,
}

/// Split `"<id> - <full name>"` on the first dash.
pub fn parse_course_name(cell: &CellValue) -> Result<CourseName, ParseError> {
    let Some(text) = cell.as_text() else {
        return Err(ParseError::wrong_kind("courseName", "text", cell.kind()));
    };
    let Some((id, full_name)) = text.split_once(RANGE_DELIMITER) else {
        return Err(ParseError::invalid_field(
            "courseName",
            "\"<course id> - <course name>\"",
        ));
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(ParseError::invalid_field("courseName", "a course id"));
    }

    Ok(CourseName {
        id: id.to_owned(),
        full_name: full_name.trim().to_owned(),
    })
}

pub fn parse_meeting_pattern(cell: &CellValue) -> Result<MeetingPattern, ParseError> {
    let Some(text) = cell.as_text() else {
        return Err(ParseError::wrong_kind("meetingPattern", "text", cell.kind()));
    };

    // The location is free text and keeps any further delimiters
    let Some((days, times, location)) = text
        .splitn(3, PATTERN_DELIMITER)
        .collect_tuple::<(_, _, _)>()
    else {
        return Err(ParseError::invalid_field(
            "meetingPattern",
            "\"<days> | <start>-<end> | <location>\"",
        ));
    };

    let days = parse_days(days)?;
    let (start, end) = times
        .split_once(RANGE_DELIMITER)
        .ok_or_else(|| ParseError::InvalidTimeString(times.trim().to_owned()))?;

    Ok(MeetingPattern {
        days,
        start: parse_time_string(start)?,
        end: parse_time_string(end)?,
        location: location.trim().to_owned(),
    })
}

/// Dash-separated weekday letters, deduplicated and in ISO order.
fn parse_days(days: &str) -> Result<Vec<Weekday>, ParseError> {
    let days = days
        .trim()
        .split(RANGE_DELIMITER)
        .map(|code| {
            Weekday::from_code(code.trim()).ok_or_else(|| {
                ParseError::invalid_field("meetingPattern", "weekday codes M, T, W, R or F")
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(days.into_iter().sorted().dedup().collect())
}
