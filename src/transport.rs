//! The textual instant encoding shared with the persistence boundary.
//!
//! The shape is `Y-M-D H:mm`: year, month, day and hour unpadded, minute
//! always two digits. The boundary's parser depends on this exact shape,
//! so it is reproduced here rather than replaced with a padded ISO form.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn format(instant: NaiveDateTime) -> String {
    format!(
        "{}-{}-{} {}:{:02}",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute()
    )
}

pub fn parse(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()
}

pub fn serialize<S: Serializer>(instant: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*instant))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid transport instant `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn pads_only_the_minute() {
        let instant = compose(
            NaiveDate::from_ymd_opt(2024, 3, 7),
            NaiveTime::from_hms_opt(9, 5, 0),
        )
        .unwrap();

        assert_eq!(format(instant), "2024-3-7 9:05");
    }

    #[test]
    fn wide_fields_stay_unpadded() {
        let instant = compose(
            NaiveDate::from_ymd_opt(2024, 12, 31),
            NaiveTime::from_hms_opt(23, 59, 0),
        )
        .unwrap();

        assert_eq!(format(instant), "2024-12-31 23:59");
    }

    #[test]
    fn round_trips_through_the_boundary_grammar() {
        let instant = compose(
            NaiveDate::from_ymd_opt(2024, 3, 7),
            NaiveTime::from_hms_opt(9, 5, 0),
        )
        .unwrap();

        assert_eq!(parse(&format(instant)), Some(instant));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse("not an instant"), None);
        assert_eq!(parse("2024-13-1 9:05"), None);
    }
}
