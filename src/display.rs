use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn prefix(instant: NaiveDateTime) -> String {
    format!(
        "{} {}.{}.{} {}:{:02}",
        weekday_abbrev(instant.weekday()),
        instant.day(),
        instant.month(),
        instant.year(),
        instant.hour(),
        instant.minute()
    )
}

/// Renders an event's duration for the event page.
///
/// Events confined to one calendar day get a single date prefix with
/// both clock times; anything else repeats the full weekday/date prefix
/// on each end. "Same day" is calendar-day identity, so an evening
/// event ending at 03:00 the next morning takes the long form even
/// though it lasts under 24 hours.
pub fn format_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    if start.date() == end.date() {
        format!("{} - {}:{:02}", prefix(start), end.hour(), end.minute())
    } else {
        format!("{} - {}", prefix(start), prefix(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn same_day_span_renders_one_date() {
        let start = instant(2024, 5, 1, 18, 0);
        let end = instant(2024, 5, 1, 23, 0);

        assert_eq!(format_span(start, end), "We 1.5.2024 18:00 - 23:00");
    }

    #[test]
    fn overnight_span_repeats_the_date_prefix() {
        let start = instant(2024, 5, 1, 22, 0);
        let end = instant(2024, 5, 2, 3, 0);

        assert_eq!(
            format_span(start, end),
            "We 1.5.2024 22:00 - Th 2.5.2024 3:00"
        );
    }

    #[test]
    fn minutes_are_zero_padded() {
        let start = instant(2024, 3, 7, 9, 5);
        let end = instant(2024, 3, 7, 10, 5);

        assert_eq!(format_span(start, end), "Th 7.3.2024 9:05 - 10:05");
    }
}
