use chrono::{NaiveDate, NaiveTime, TimeDelta};
use itertools::Itertools;

use crate::{
    calendar::{CalendarOptions, UntilStyle, local_to_utc},
    component::{ComponentMut, ContentLine, IcalEvent},
    schedule::Section,
    types::Weekday,
};

const DATE_FORMAT: &str = "%Y%m%d";
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// `RRULE` value for a weekly recurrence on `days` up to and including `until`.
pub fn weekly_rule(
    days: &[Weekday],
    until: NaiveDate,
    style: UntilStyle,
    tz: chrono_tz::Tz,
) -> String {
    let until = match style {
        UntilStyle::Date => until.format(DATE_FORMAT).to_string(),
        UntilStyle::UtcEndOfDay => {
            let last_second =
                until.and_time(NaiveTime::MIN) + TimeDelta::days(1) - TimeDelta::seconds(1);
            local_to_utc(tz, last_second)
                .format(UTC_DATETIME_FORMAT)
                .to_string()
        }
    };
    format!(
        "FREQ=WEEKLY;BYDAY={};UNTIL={until}",
        days.iter().map(|day| day.ical_code()).join(",")
    )
}

/// Stable identifier for the `index`th section of a schedule.
pub fn event_uid(index: usize, section: &Section, domain: &str) -> String {
    let slug = section
        .name()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    let slug = slug.split('-').filter(|part| !part.is_empty()).join("-");
    format!(
        "{index}-{slug}-{start}@{domain}",
        start = section.first_start().format(DATETIME_FORMAT)
    )
}

pub(crate) fn section_event(
    index: usize,
    section: &Section,
    options: &CalendarOptions,
) -> IcalEvent {
    let tz = options.timezone.tz();
    let tzid = options.timezone.tzid();
    let dtstamp = options
        .dtstamp
        .unwrap_or_else(|| local_to_utc(tz, section.first_start()));

    let mut event = IcalEvent::default();
    event.add_content_line(ContentLine::text(
        "UID",
        &event_uid(index, section, &options.uid_domain),
    ));
    event.add_content_line(ContentLine::new(
        "DTSTAMP",
        dtstamp.format(UTC_DATETIME_FORMAT).to_string(),
    ));
    event.add_content_line(
        ContentLine::new(
            "DTSTART",
            section.first_start().format(DATETIME_FORMAT).to_string(),
        )
        .with_param("TZID", tzid),
    );
    event.add_content_line(
        ContentLine::new(
            "DTEND",
            section.first_end().format(DATETIME_FORMAT).to_string(),
        )
        .with_param("TZID", tzid),
    );
    event.add_content_line(ContentLine::new(
        "RRULE",
        weekly_rule(section.days(), section.recurrence_end(), options.until, tz),
    ));
    event.add_content_line(ContentLine::text("SUMMARY", section.name()));
    event.add_content_line(ContentLine::text("DESCRIPTION", section.description()));
    event.add_content_line(ContentLine::text("LOCATION", section.location()));

    tracing::trace!(index, summary = section.name(), "rendered event");
    event
}
