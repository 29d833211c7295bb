use std::collections::HashMap;
use std::sync::OnceLock;

use crate::component::{Component, ComponentMut, ContentLine, ContentLineError, ContentLineParser};

// Memoise parsed vtimezones
static TIMEZONES_CACHE: OnceLock<HashMap<&'static str, OnceLock<Option<IcalTimeZone>>>> =
    OnceLock::new();

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeZoneParseError {
    #[error(transparent)]
    ContentLine(#[from] ContentLineError),
    #[error("no BEGIN:VTIMEZONE found")]
    MissingHeader,
    #[error("unexpected end of input inside {0}")]
    UnexpectedEnd(&'static str),
    #[error("unexpected component {0} inside VTIMEZONE")]
    UnexpectedComponent(String),
}

#[derive(Debug, Clone, Default)]
pub struct IcalTimeZone {
    pub properties: Vec<ContentLine>,
    pub transitions: Vec<IcalTimeZoneTransition>,
}

simple_component!(IcalTimeZone, "VTIMEZONE");

impl IcalTimeZone {
    pub fn get_tzid(&self) -> &str {
        self.get_property("TZID")
            .and_then(|prop| prop.value.as_deref())
            .unwrap_or_default()
    }

    /// This is a common property containing a timezone identifier from the IANA TZDB
    pub fn get_lic_location(&self) -> Option<&str> {
        self.get_property("X-LIC-LOCATION")
            .and_then(|prop| prop.value.as_deref())
    }

    /// The bundled definition for an IANA timezone identifier, parsed once per process.
    pub fn from_tzid(tzid: &str) -> Option<&'static Self> {
        let timezones = TIMEZONES_CACHE.get_or_init(|| {
            vtimezones_rs::VTIMEZONES
                .keys()
                .map(|tzid| (*tzid, OnceLock::new()))
                .collect()
        });

        let lock = timezones.get(tzid)?;
        lock.get_or_init(|| {
            let tz_ics = vtimezones_rs::VTIMEZONES.get(tzid)?;
            Self::from_ics(tz_ics)
                .inspect_err(|err| tracing::warn!(tzid, %err, "invalid bundled vtimezone"))
                .ok()
        })
        .as_ref()
    }

    /// Parse the first `VTIMEZONE` in `text`, skipping any enclosing `VCALENDAR`.
    pub fn from_ics(text: &str) -> Result<Self, TimeZoneParseError> {
        let mut lines = ContentLineParser::new(text);
        loop {
            let line = lines.next().ok_or(TimeZoneParseError::MissingHeader)??;
            if begins(&line, Self::NAMES) {
                break;
            }
        }

        let mut vtimezone = Self::default();
        loop {
            let line = lines
                .next()
                .ok_or(TimeZoneParseError::UnexpectedEnd("VTIMEZONE"))??;
            if ends(&line, Self::NAMES) {
                return Ok(vtimezone);
            }
            if line.name != "BEGIN" {
                vtimezone.add_content_line(line);
                continue;
            }

            let transition = match line.value.as_deref().map(str::to_uppercase).as_deref() {
                Some("STANDARD") => IcalTimeZoneTransitionType::STANDARD,
                Some("DAYLIGHT") => IcalTimeZoneTransitionType::DAYLIGHT,
                other => {
                    return Err(TimeZoneParseError::UnexpectedComponent(
                        other.unwrap_or_default().to_owned(),
                    ));
                }
            };
            let mut observance = IcalTimeZoneTransition::new(transition);
            loop {
                let line = lines
                    .next()
                    .ok_or(TimeZoneParseError::UnexpectedEnd("VTIMEZONE"))??;
                if ends(&line, &[observance.get_comp_name()]) {
                    break;
                }
                observance.add_content_line(line);
            }
            vtimezone.transitions.push(observance);
        }
    }
}

fn begins(line: &ContentLine, names: &[&str]) -> bool {
    line.name == "BEGIN" && has_value_in(line, names)
}

fn ends(line: &ContentLine, names: &[&str]) -> bool {
    line.name == "END" && has_value_in(line, names)
}

fn has_value_in(line: &ContentLine, names: &[&str]) -> bool {
    line.value
        .as_deref()
        .is_some_and(|value| names.iter().any(|name| value.eq_ignore_ascii_case(name)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IcalTimeZoneTransitionType {
    #[default]
    STANDARD,
    DAYLIGHT,
}

/// A `STANDARD` or `DAYLIGHT` observance inside a `VTIMEZONE`.
#[derive(Debug, Clone, Default)]
pub struct IcalTimeZoneTransition {
    pub transition: IcalTimeZoneTransitionType,
    pub properties: Vec<ContentLine>,
}

impl IcalTimeZoneTransition {
    pub fn new(transition: IcalTimeZoneTransitionType) -> Self {
        Self {
            transition,
            properties: Vec::new(),
        }
    }
}

impl Component for IcalTimeZoneTransition {
    const NAMES: &[&str] = &["STANDARD", "DAYLIGHT"];

    fn get_comp_name(&self) -> &'static str {
        match self.transition {
            IcalTimeZoneTransitionType::STANDARD => "STANDARD",
            IcalTimeZoneTransitionType::DAYLIGHT => "DAYLIGHT",
        }
    }

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl ComponentMut for IcalTimeZoneTransition {
    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine> {
        &mut self.properties
    }
}
