//! Turn an enrolled-courses schedule export into an iCalendar document.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use coursecal::{CellGrid, CellValue, calendar::CalendarOptions};
//!
//! let date = |d| CellValue::Date(NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
//! let grid = CellGrid::new(vec![
//!     vec!["My Enrolled Courses".into()],
//!     vec![],
//!     [
//!         "Course Listing",
//!         "Instructional Format",
//!         "Meeting Patterns",
//!         "Start Date",
//!         "End Date",
//!         "Instructor",
//!     ]
//!     .map(CellValue::from)
//!     .to_vec(),
//!     vec![
//!         "CS 101 - Intro to Programming".into(),
//!         "Lecture".into(),
//!         "M-W | 10:00 AM - 10:50 AM | Hall 1".into(),
//!         date("2024-09-03"),
//!         date("2024-12-06"),
//!         "Ada Lovelace".into(),
//!     ],
//! ]);
//!
//! let schedule = coursecal::parse(&grid).unwrap();
//! let ics = coursecal::calendar::render(&schedule, &CalendarOptions::default());
//! assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20241206\r\n"));
//! ```

const PARAM_VALUE_DELIMITER: char = ',';
const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const PARAM_QUOTE: char = '"';

pub mod grid;
pub use grid::{CellGrid, CellKind, CellValue};

pub mod types;

pub mod schedule;
pub use schedule::{Schedule, Section};

pub mod parser;
pub use parser::{ParseError, ParserOptions, ScheduleParser, parse};

pub mod component;

pub mod generator;

pub mod calendar;
