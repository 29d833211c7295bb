mod error;
pub use error::ParseError;

mod header;
pub use header::{find_columns, find_header_row};

mod time;
pub use time::parse_time_string;

mod pattern;
pub use pattern::{CourseName, MeetingPattern, parse_course_name, parse_meeting_pattern};

mod schedule;
pub use schedule::{ScheduleParser, SectionRows, first_meeting_date, parse};

/// Header texts of the columns a schedule export must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub course_listing: String,
    pub instructional_format: String,
    pub meeting_patterns: String,
    pub start_date: String,
    pub end_date: String,
    pub instructor: String,
}

impl ColumnNames {
    pub fn as_array(&self) -> [&str; 6] {
        [
            self.course_listing.as_str(),
            self.instructional_format.as_str(),
            self.meeting_patterns.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.instructor.as_str(),
        ]
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            course_listing: "Course Listing".to_owned(),
            instructional_format: "Instructional Format".to_owned(),
            meeting_patterns: "Meeting Patterns".to_owned(),
            start_date: "Start Date".to_owned(),
            end_date: "End Date".to_owned(),
            instructor: "Instructor".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// First-column text that opens the enrolled-courses table.
    pub enrolled_marker: String,
    /// Distance from the marker row to the header row.
    pub header_offset: usize,
    /// First-column texts that open the tables following the enrolled courses.
    /// Parsing stops at the first row carrying one of them.
    pub end_markers: Vec<String>,
    pub columns: ColumnNames,
    /// Skip rows without any content instead of rejecting them.
    pub skip_blank_rows: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            enrolled_marker: "My Enrolled Courses".to_owned(),
            header_offset: 2,
            end_markers: vec![
                "My Dropped/Withdrawn Courses".to_owned(),
                "My Completed Courses".to_owned(),
            ],
            columns: ColumnNames::default(),
            skip_blank_rows: false,
        }
    }
}
