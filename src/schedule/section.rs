use chrono::{Datelike, NaiveDate, NaiveDateTime};
use itertools::Itertools;

use crate::{parser::ParseError, types::Weekday};

/// One recurring class meeting.
///
/// A `Section` can only be obtained through [`SectionBuilder::build`], which
/// guarantees that `days` is non-empty, that the first occurrence falls on one
/// of `days`, ends after it starts on the same date, and that the recurrence
/// bound is not before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section {
    name: String,
    description: String,
    location: String,
    days: Vec<Weekday>,
    first_start: NaiveDateTime,
    first_end: NaiveDateTime,
    recurrence_end: NaiveDate,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Distinct meeting days in ascending ISO order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Start of the first meeting, as wall time in the reference timezone.
    pub fn first_start(&self) -> NaiveDateTime {
        self.first_start
    }

    pub fn first_end(&self) -> NaiveDateTime {
        self.first_end
    }

    /// Last calendar date (inclusive) on which the section may meet.
    pub fn recurrence_end(&self) -> NaiveDate {
        self.recurrence_end
    }

    pub fn builder() -> SectionBuilder {
        SectionBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    pub name: String,
    pub description: String,
    pub location: String,
    pub days: Vec<Weekday>,
    pub first_start: Option<NaiveDateTime>,
    pub first_end: Option<NaiveDateTime>,
    pub recurrence_end: Option<NaiveDate>,
}

impl SectionBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn first_meeting(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.first_start = Some(start);
        self.first_end = Some(end);
        self
    }

    pub fn recurrence_end(mut self, date: NaiveDate) -> Self {
        self.recurrence_end = Some(date);
        self
    }

    pub fn build(self) -> Result<Section, ParseError> {
        let days = self.days.into_iter().sorted().dedup().collect_vec();
        if days.is_empty() {
            return Err(ParseError::invalid_field("days", "at least one weekday"));
        }

        let first_start = self
            .first_start
            .ok_or_else(|| ParseError::invalid_field("firstStart", "date-time"))?;
        let first_end = self
            .first_end
            .ok_or_else(|| ParseError::invalid_field("firstEnd", "date-time"))?;
        let recurrence_end = self
            .recurrence_end
            .ok_or_else(|| ParseError::invalid_field("recurrenceEnd", "date"))?;

        if first_end.date() != first_start.date() || first_end <= first_start {
            return Err(ParseError::invalid_field(
                "firstEnd",
                "end time after start time on the same day",
            ));
        }
        if !days.contains(&Weekday::from(first_start.weekday())) {
            return Err(ParseError::invalid_field(
                "firstStart",
                "date falling on one of the meeting days",
            ));
        }
        if recurrence_end < first_start.date() {
            return Err(ParseError::invalid_field(
                "recurrenceEnd",
                "date on or after the first meeting",
            ));
        }

        Ok(Section {
            name: self.name,
            description: self.description,
            location: self.location,
            days,
            first_start,
            first_end,
            recurrence_end,
        })
    }
}
