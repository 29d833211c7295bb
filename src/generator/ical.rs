use crate::component::{IcalCalendar, IcalEvent, IcalTimeZone, IcalTimeZoneTransition};
use crate::generator::Emitter;

macro_rules! generate_emitter {
    ($struct:ty, $($prop:ident),*) => {
        impl Emitter for $struct {
            fn generate(&self) -> String {
                let compname = &crate::component::Component::get_comp_name(self);
                let mut text = format!("BEGIN:{compname}\r\n");
                text += &crate::component::Component::get_properties(self).generate();
                $(text += &self.$prop.generate();)*
                text + "END:" + compname + "\r\n"
            }
        }
    };
}

generate_emitter!(IcalTimeZoneTransition,);
generate_emitter!(IcalTimeZone, transitions);
generate_emitter!(IcalEvent,);
generate_emitter!(IcalCalendar, vtimezones, events);
