//! Time sources and the clock display format.

use chrono::{Datelike, NaiveDateTime, Timelike};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Where the publisher gets "now" from.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveDateTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Formats a time as `H:MMam|pm, Weekday, Month D, YYYY`.
///
/// The hour is on a 12-hour dial: midnight shows as 12, and `pm` starts
/// at noon.
///
/// ```rust
/// use chrono::NaiveDate;
/// use delve_clock::format_clock;
///
/// let t = NaiveDate::from_ymd_opt(2017, 7, 18)
///     .unwrap()
///     .and_hms_opt(15, 7, 0)
///     .unwrap();
/// assert_eq!(format_clock(&t), "3:07pm, Tuesday, July 18, 2017");
/// ```
pub fn format_clock(time: &NaiveDateTime) -> String {
    let hour = time.hour();
    let dial = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    let meridiem = if hour >= 12 { "pm" } else { "am" };
    let weekday = WEEKDAYS[time.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[time.month0() as usize];

    format!(
        "{dial}:{:02}{meridiem}, {weekday}, {month} {}, {}",
        time.minute(),
        time.day(),
        time.year()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(format_clock(&at(2017, 7, 18, 15, 7)), "3:07pm, Tuesday, July 18, 2017");
    }

    #[test]
    fn test_midnight_shows_twelve_am() {
        assert_eq!(format_clock(&at(2024, 1, 1, 0, 5)), "12:05am, Monday, January 1, 2024");
    }

    #[test]
    fn test_noon_shows_twelve_pm() {
        assert_eq!(format_clock(&at(2024, 2, 29, 12, 0)), "12:00pm, Thursday, February 29, 2024");
    }

    #[test]
    fn test_late_evening() {
        assert_eq!(format_clock(&at(1999, 12, 31, 23, 59)), "11:59pm, Friday, December 31, 1999");
    }

    #[test]
    fn test_morning_has_no_hour_padding() {
        assert_eq!(format_clock(&at(2023, 10, 1, 9, 3)), "9:03am, Sunday, October 1, 2023");
    }

    #[test]
    fn test_saturday_and_single_digit_day() {
        assert_eq!(format_clock(&at(2026, 5, 2, 1, 30)), "1:30am, Saturday, May 2, 2026");
    }

    #[test]
    fn test_fixed_time_source() {
        let t = at(2017, 7, 18, 15, 7);
        assert_eq!(FixedTime(t).now(), t);
    }
}
