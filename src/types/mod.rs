mod time;
pub use time::ClockTime;

mod weekday;
pub use weekday::Weekday;
