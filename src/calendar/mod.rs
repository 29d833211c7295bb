//! Build an iCalendar document from a [`Schedule`].
//!
//! Every section becomes one `VEVENT` whose `DTSTART`/`DTEND` are wall times
//! bound to the reference timezone via `TZID`, recurring weekly on the
//! section's days. The document embeds the bundled `VTIMEZONE` for that zone,
//! so recurrences keep their local time across daylight-saving changes.

mod error;
pub use error::ConfigError;

mod event;
pub use event::{event_uid, weekly_rule};

mod timezone;
pub use timezone::ReferenceZone;

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

use crate::{component::IcalCalendar, component::ComponentMut, component::ContentLine};
use crate::{generator::Emitter, schedule::Schedule};

pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::New_York;
pub const DEFAULT_PRODUCT_ID: &str = "-//coursecal//Course Schedule Export//EN";

/// How the `UNTIL` part of the recurrence rule is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UntilStyle {
    /// The bare recurrence end date, e.g. `UNTIL=20241206`.
    #[default]
    Date,
    /// The last second of the recurrence end date in the reference timezone,
    /// expressed in UTC, e.g. `UNTIL=20241207T045959Z`.
    UtcEndOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Reference timezone all section times are interpreted in.
    pub timezone: ReferenceZone,
    pub product_id: String,
    /// Emitted as `X-WR-CALNAME` when set.
    pub calendar_name: Option<String>,
    pub until: UntilStyle,
    /// Fixed `DTSTAMP` for every event. Without it each event is stamped with
    /// its first occurrence, keeping the output reproducible.
    pub dtstamp: Option<DateTime<Utc>>,
    /// Right-hand side of the generated `UID`s.
    pub uid_domain: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            timezone: ReferenceZone::new(DEFAULT_TIMEZONE)
                .expect("the bundled definitions cover the default timezone"),
            product_id: DEFAULT_PRODUCT_ID.to_owned(),
            calendar_name: None,
            until: UntilStyle::default(),
            dtstamp: None,
            uid_domain: "coursecal".to_owned(),
        }
    }
}

impl CalendarOptions {
    /// Use the IANA timezone called `name`, e.g. `"America/Chicago"`.
    pub fn with_timezone_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.timezone = name.parse()?;
        Ok(self)
    }
}

/// Converts a local wall time in `tz` to UTC.
///
/// Ambiguous times resolve to the earlier instant. Times skipped by a
/// daylight-saving gap are shifted by the offset in effect before the gap.
pub(crate) fn local_to_utc(tz: chrono_tz::Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local).earliest() {
        Some(datetime) => datetime.with_timezone(&Utc),
        None => {
            // The offset a day earlier is the one in effect before the gap
            let offset = tz
                .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                .fix();
            (local - TimeDelta::seconds(offset.local_minus_utc().into())).and_utc()
        }
    }
}

pub struct CalendarBuilder<'s> {
    schedule: &'s Schedule,
    options: CalendarOptions,
}

impl<'s> CalendarBuilder<'s> {
    pub fn new(schedule: &'s Schedule) -> Self {
        Self {
            schedule,
            options: Default::default(),
        }
    }

    pub fn with_options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(&self) -> IcalCalendar {
        let options = &self.options;
        let mut calendar = IcalCalendar::new(&options.product_id);
        if let Some(name) = &options.calendar_name {
            calendar.add_content_line(ContentLine::text("X-WR-CALNAME", name));
        }
        calendar.add_content_line(ContentLine::new("X-WR-TIMEZONE", options.timezone.tzid()));

        calendar.vtimezones.push(options.timezone.vtimezone().clone());
        calendar.events = self
            .schedule
            .iter()
            .enumerate()
            .map(|(index, section)| event::section_event(index, section, options))
            .collect();

        tracing::debug!(
            events = calendar.events.len(),
            timezone = options.timezone.tzid(),
            "built calendar"
        );
        calendar
    }

    pub fn render(&self) -> String {
        self.build().generate()
    }
}

/// Render `schedule` as an iCalendar document.
pub fn render(schedule: &Schedule, options: &CalendarOptions) -> String {
    CalendarBuilder::new(schedule)
        .with_options(options.clone())
        .render()
}

impl Schedule {
    /// Render with the default [`CalendarOptions`].
    pub fn to_icalendar(&self) -> String {
        CalendarBuilder::new(self).render()
    }
}
