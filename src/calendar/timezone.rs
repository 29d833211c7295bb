use std::str::FromStr;

use chrono_tz::Tz;

use crate::{calendar::ConfigError, component::IcalTimeZone};

/// A named IANA timezone together with its bundled `VTIMEZONE` definition.
///
/// The definition carries the zone's historical observances and its current
/// yearly rules, so recurrences stay correct past any fixed window.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceZone {
    tz: Tz,
    vtimezone: &'static IcalTimeZone,
}

impl ReferenceZone {
    pub fn new(tz: Tz) -> Result<Self, ConfigError> {
        let vtimezone = IcalTimeZone::from_tzid(tz.name())
            .ok_or_else(|| ConfigError::MissingDefinition(tz.name().to_owned()))?;
        Ok(Self { tz, vtimezone })
    }

    #[inline]
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// The `TZID` events refer to.
    #[inline]
    pub fn tzid(&self) -> &'static str {
        self.vtimezone.get_tzid()
    }

    #[inline]
    pub fn vtimezone(&self) -> &'static IcalTimeZone {
        self.vtimezone
    }
}

impl PartialEq for ReferenceZone {
    fn eq(&self, other: &Self) -> bool {
        self.tz == other.tz
    }
}

impl Eq for ReferenceZone {}

impl FromStr for ReferenceZone {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let tz = Tz::from_str(name).map_err(|_| ConfigError::UnknownTimezone(name.to_owned()))?;
        Self::new(tz)
    }
}
