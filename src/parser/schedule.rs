use chrono::{Datelike, Days, NaiveDate};

use crate::{
    grid::{CellGrid, CellValue},
    parser::{
        ParseError, ParserOptions, find_columns, find_header_row, parse_course_name,
        parse_meeting_pattern,
    },
    schedule::{Schedule, Section},
    types::Weekday,
};

/// Parse a schedule export with the default options.
pub fn parse(grid: &CellGrid) -> Result<Schedule, ParseError> {
    ScheduleParser::new(grid).parse()
}

/// Date of the first meeting on or after `start`, given the meeting days.
///
/// Exports anchor the start date to the beginning of the term, which need not
/// be a meeting day. Returns `None` for empty `days` or on date overflow.
pub fn first_meeting_date(start: NaiveDate, days: &[Weekday]) -> Option<NaiveDate> {
    let start_weekday = Weekday::from(start.weekday());
    let offset = days
        .iter()
        .map(|&day| start_weekday.days_until(day))
        .min()?;
    start.checked_add_days(Days::new(offset.into()))
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    course_listing: usize,
    instructional_format: usize,
    meeting_patterns: usize,
    start_date: usize,
    end_date: usize,
    instructor: usize,
}

impl ColumnIndices {
    fn resolve(
        grid: &CellGrid,
        header_row: usize,
        options: &ParserOptions,
    ) -> Result<Self, ParseError> {
        let names = &options.columns;
        let resolved = find_columns(grid, header_row, &names.as_array())?;
        let index = |name: &str| {
            resolved
                .get(name)
                .copied()
                .ok_or_else(|| ParseError::ColumnNotFound(name.to_owned()))
        };
        Ok(Self {
            course_listing: index(&names.course_listing)?,
            instructional_format: index(&names.instructional_format)?,
            meeting_patterns: index(&names.meeting_patterns)?,
            start_date: index(&names.start_date)?,
            end_date: index(&names.end_date)?,
            instructor: index(&names.instructor)?,
        })
    }
}

pub struct ScheduleParser<'g> {
    grid: &'g CellGrid,
    options: ParserOptions,
}

impl<'g> ScheduleParser<'g> {
    pub fn new(grid: &'g CellGrid) -> Self {
        Self {
            grid,
            options: Default::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Locate the table and return an iterator over its rows.
    ///
    /// The iterator yields at most one error, after which it is exhausted.
    pub fn sections(&self) -> Result<SectionRows<'_>, ParseError> {
        let header_row = find_header_row(
            self.grid,
            &self.options.enrolled_marker,
            self.options.header_offset,
        )?;
        let columns = ColumnIndices::resolve(self.grid, header_row, &self.options)?;

        Ok(SectionRows {
            grid: self.grid,
            options: &self.options,
            columns,
            row: header_row + 1,
            done: false,
        })
    }

    /// Parse the whole table. Any invalid row fails the entire parse.
    pub fn parse(&self) -> Result<Schedule, ParseError> {
        let schedule = self.sections()?.collect::<Result<Schedule, _>>()?;
        tracing::debug!(sections = schedule.len(), "parsed schedule");
        Ok(schedule)
    }
}

pub struct SectionRows<'p> {
    grid: &'p CellGrid,
    options: &'p ParserOptions,
    columns: ColumnIndices,
    row: usize,
    done: bool,
}

impl SectionRows<'_> {
    fn is_end_marker(&self, cells: &[CellValue]) -> bool {
        cells
            .first()
            .and_then(CellValue::as_text)
            .is_some_and(|text| self.options.end_markers.iter().any(|m| m == text))
    }

    fn parse_row(&self, row: usize) -> Result<Section, ParseError> {
        let cell = |column: usize| self.grid.cell(row, column);
        let course = parse_course_name(cell(self.columns.course_listing))?;

        let format_cell = cell(self.columns.instructional_format);
        let instructional_format = format_cell.as_text().map(str::trim).ok_or_else(|| {
            ParseError::wrong_kind("instructionalFormat", "text", format_cell.kind())
        })?;

        let mut description = course.full_name;
        if let Some(instructor) = cell(self.columns.instructor)
            .as_text()
            .map(str::trim)
            .filter(|instructor| !instructor.is_empty())
        {
            description = format!("{description} with {instructor}");
        }

        let pattern = parse_meeting_pattern(cell(self.columns.meeting_patterns))?;

        let start_date = date_cell(cell(self.columns.start_date), "startDate")?;
        let end_date = date_cell(cell(self.columns.end_date), "endDate")?;

        let first_date = first_meeting_date(start_date, &pattern.days).ok_or_else(|| {
            ParseError::invalid_field("startDate", "date within the supported range")
        })?;

        let section = Section::builder()
            .name(format!("{} {instructional_format}", course.id))
            .description(description)
            .location(pattern.location)
            .days(pattern.days)
            .first_meeting(
                first_date.and_time(pattern.start.to_naive_time()),
                first_date.and_time(pattern.end.to_naive_time()),
            )
            .recurrence_end(end_date)
            .build()?;

        tracing::trace!(row, name = section.name(), "parsed section");
        Ok(section)
    }
}

fn date_cell(cell: &CellValue, field: &'static str) -> Result<NaiveDate, ParseError> {
    cell.as_date()
        .ok_or_else(|| ParseError::wrong_kind(field, "date", cell.kind()))
}

impl Iterator for SectionRows<'_> {
    type Item = Result<Section, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let row = self.row;
            let cells = self.grid.row(row)?;
            self.row += 1;

            if self.is_end_marker(cells) {
                tracing::debug!(row, "reached end of enrolled courses");
                self.done = true;
                return None;
            }
            if self.options.skip_blank_rows && cells.iter().all(CellValue::is_empty) {
                tracing::trace!(row, "skipping blank row");
                continue;
            }

            let result = self.parse_row(row);
            self.done = result.is_err();
            return Some(result);
        }
        None
    }
}
