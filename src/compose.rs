use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Merges a separately picked calendar date and clock time into one
/// naive local instant.
///
/// Returns `None` as soon as either half is missing — a half-picked
/// event has no instant, never a defaulted one. Seconds and sub-second
/// fields of the picked time are discarded.
pub fn compose(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
    let time = time?.with_second(0)?.with_nanosecond(0)?;
    Some(date?.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn merges_date_and_time_fields() {
        let instant = compose(Some(date(2024, 3, 7)), Some(time(9, 5))).unwrap();

        assert_eq!(instant.year(), 2024);
        assert_eq!(instant.month(), 3);
        assert_eq!(instant.day(), 7);
        assert_eq!(instant.hour(), 9);
        assert_eq!(instant.minute(), 5);
        assert_eq!(instant.second(), 0);
    }

    #[test]
    fn discards_seconds_from_the_time_pick() {
        let precise = NaiveTime::from_hms_opt(18, 30, 59).unwrap();
        let instant = compose(Some(date(2024, 5, 1)), Some(precise)).unwrap();

        assert_eq!(instant.second(), 0);
        assert_eq!(instant.nanosecond(), 0);
    }

    #[test]
    fn absent_on_any_missing_half() {
        assert_eq!(compose(None, Some(time(12, 0))), None);
        assert_eq!(compose(Some(date(2024, 5, 1)), None), None);
        assert_eq!(compose(None, None), None);
    }
}
