//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// UTC timestamp used for appointment dates and the calendar selection.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Combine a calendar day and an optional time of day into a [`Timestamp`].
///
/// A day picked without a time stands for the start of that day.
#[must_use]
pub fn on_day(day: NaiveDate, time: Option<NaiveTime>) -> Timestamp {
    day.and_time(time.unwrap_or(NaiveTime::MIN)).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_use_midnight_when_no_time_given() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let ts = on_day(day, None);
        assert_eq!(ts.to_rfc3339(), "2024-03-09T00:00:00+00:00");
    }

    #[test]
    fn should_keep_time_of_day_when_given() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let ts = on_day(day, Some(time));
        assert_eq!(ts.to_rfc3339(), "2024-03-09T14:30:00+00:00");
    }
}
