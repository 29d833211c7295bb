use derive_more::Display;

/// Day of the week, numbered by ISO 8601 (Monday = 1 .. Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// Single-letter weekday codes used in meeting patterns. Weekends have none.
static MEETING_DAY_CODES: phf::Map<&'static str, Weekday> = phf::phf_map! {
    "M" => Weekday::Monday,
    "T" => Weekday::Tuesday,
    "W" => Weekday::Wednesday,
    "R" => Weekday::Thursday,
    "F" => Weekday::Friday,
};

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a meeting-pattern letter (`M`, `T`, `W`, `R`, `F`).
    pub fn from_code(code: &str) -> Option<Self> {
        MEETING_DAY_CODES.get(code).copied()
    }

    /// Two-letter code used by iCalendar `BYDAY`.
    pub fn ical_code(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    /// Number of days from `self` forward to the next `target` (0 if equal).
    #[inline]
    pub fn days_until(self, target: Weekday) -> u8 {
        (target.ordinal() + 7 - self.ordinal()) % 7
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        Self::ALL[value.num_days_from_monday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}
