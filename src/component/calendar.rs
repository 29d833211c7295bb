use crate::component::{ContentLine, IcalEvent, IcalTimeZone};

/// A `VCALENDAR` object.
#[derive(Debug, Clone, Default)]
pub struct IcalCalendar {
    pub properties: Vec<ContentLine>,
    pub vtimezones: Vec<IcalTimeZone>,
    pub events: Vec<IcalEvent>,
}

simple_component!(IcalCalendar, "VCALENDAR");

impl IcalCalendar {
    pub fn new(product_id: &str) -> Self {
        Self {
            properties: vec![
                ContentLine::new("VERSION", "2.0"),
                ContentLine::text("PRODID", product_id),
                ContentLine::new("CALSCALE", "GREGORIAN"),
                ContentLine::new("METHOD", "PUBLISH"),
            ],
            vtimezones: vec![],
            events: vec![],
        }
    }

    pub fn get_tzids(&self) -> Vec<&str> {
        self.vtimezones.iter().map(IcalTimeZone::get_tzid).collect()
    }
}
