//! In-memory iCalendar components produced by the calendar builder.

macro_rules! simple_component {
    ($struct:ty, $name:literal) => {
        impl crate::component::Component for $struct {
            const NAMES: &[&str] = &[$name];

            fn get_properties(&self) -> &Vec<crate::component::ContentLine> {
                &self.properties
            }
        }

        impl crate::component::ComponentMut for $struct {
            fn get_properties_mut(&mut self) -> &mut Vec<crate::component::ContentLine> {
                &mut self.properties
            }
        }
    };
}

mod content_line;
pub use content_line::{ContentLine, ContentLineParams};

mod reader;
pub use reader::{ContentLineError, ContentLineParser};

mod calendar;
pub use calendar::IcalCalendar;

mod event;
pub use event::IcalEvent;

mod timezone;
pub use timezone::{
    IcalTimeZone, IcalTimeZoneTransition, IcalTimeZoneTransitionType, TimeZoneParseError,
};

/// An immutable interface for an iCalendar component.
pub trait Component {
    const NAMES: &[&str];

    fn get_comp_name(&self) -> &'static str {
        assert_eq!(
            Self::NAMES.len(),
            1,
            "Default implementation only applicable for fixed component name"
        );
        Self::NAMES[0]
    }

    fn get_properties(&self) -> &Vec<ContentLine>;

    fn get_property<'c>(&'c self, name: &str) -> Option<&'c ContentLine> {
        self.get_properties().iter().find(|p| p.name == name)
    }
}

/// A mutable interface for an iCalendar component.
pub trait ComponentMut: Component + Default {
    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine>;

    /// Add the given property.
    #[inline]
    fn add_content_line(&mut self, property: ContentLine) {
        self.get_properties_mut().push(property);
    }
}
