use chrono::{Datelike, NaiveDateTime, Timelike};
use ics::parameters;
use ics::properties::{Description, DtEnd, DtStart, Location, Organizer, Summary};
use ics::{escape_text, ICalendar};
use thiserror::Error;

use crate::event::{Event, Organizer as User};
use crate::transport;

/// Identifier stamped into every document this system produces.
pub const PRODUCT_ID: &str = "teekkarikalenteri/ics";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("instant `{0}` cannot be represented in the iCalendar date-time format")]
    UnrepresentableInstant(String),
}

/// Renders an instant in the iCalendar basic format, `YYYYMMDDTHHMMSS`
/// with zero seconds. The format has no room for years outside four
/// digits, so those fail.
fn dt_stamp(instant: NaiveDateTime) -> Result<String, ExportError> {
    if !(0..=9999).contains(&instant.year()) {
        return Err(ExportError::UnrepresentableInstant(transport::format(
            instant,
        )));
    }

    Ok(format!(
        "{:04}{:02}{:02}T{:02}{:02}00",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute()
    ))
}

/// Serializes a stored event and its organizer into a calendar
/// interchange document ready to be offered as a download.
///
/// This is a pure field mapping: summary from the title, location and
/// description as-is, start and end broken down to calendar fields with
/// zero seconds, and the organizer credited by name and link. The
/// encoding grammar itself belongs to the `ics` crate.
pub fn export(event: &Event, organizer: &User) -> Result<String, ExportError> {
    let start = dt_stamp(event.start)?;
    let end = dt_stamp(event.end)?;

    let uid = format!("{}_{}", start, event.title.replace(' ', "-"));

    let mut ics_event = ics::Event::new(uid, start.clone());
    ics_event.push(DtStart::new(start));
    ics_event.push(DtEnd::new(end));
    ics_event.push(Summary::new(escape_text(event.title.clone())));
    ics_event.push(Location::new(escape_text(event.location.clone())));

    if !event.description.is_empty() {
        ics_event.push(Description::new(escape_text(event.description.clone())));
    }

    let mut credit = Organizer::new(organizer.link.clone());
    credit.append(parameters!("CN" => organizer.name.clone()));
    ics_event.push(credit);

    let mut icalendar = ICalendar::new("2.0", PRODUCT_ID);
    icalendar.add_event(ics_event);

    Ok(icalendar.to_string())
}

/// Filename offered with the downloadable document: the title with
/// everything outside the basic Latin alphabet dropped, plus a fixed
/// suffix. A convenience, not a uniqueness guarantee.
pub fn download_filename(title: &str) -> String {
    let sanitized: String = title.chars().filter(char::is_ascii_alphabetic).collect();
    format!("{sanitized}_import.ics")
}
