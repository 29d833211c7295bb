use crate::component::{Component, ContentLine};

/// A `VEVENT` object.
#[derive(Debug, Clone, Default)]
pub struct IcalEvent {
    pub properties: Vec<ContentLine>,
}

simple_component!(IcalEvent, "VEVENT");

impl IcalEvent {
    pub fn get_uid(&self) -> Option<&str> {
        self.get_property("UID")
            .and_then(|prop| prop.value.as_deref())
    }

    pub fn get_summary(&self) -> Option<&str> {
        self.get_property("SUMMARY")
            .and_then(|prop| prop.value.as_deref())
    }
}
