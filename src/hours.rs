use chrono::{Datelike, Timelike, Weekday};

/// Whether a commit timestamp falls outside regular working hours:
/// any time on a weekend, or a weekday before 08:00 or after 20:00
/// local time. The 8 and 20 o'clock hours themselves count as
/// working hours; 21:00 does not. Existing reports depend on this
/// exact boundary.
pub fn is_off_hours<T: Datelike + Timelike>(timestamp: &T) -> bool {
    if matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun) {
        return true;
    }
    timestamp.hour() < 8 || timestamp.hour() > 20
}
