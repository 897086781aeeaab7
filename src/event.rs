use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::validate::{validate, Violation};

/// An event as it crosses the persistence boundary. Start and end travel
/// in the transport shape (`Y-M-D H:mm`) and are parsed back into
/// instants on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub location: String,
    #[serde(with = "crate::transport")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::transport")]
    pub end: NaiveDateTime,
    pub multi: bool,
    #[serde(default)]
    pub description: String,
    pub organizer_id: i64,
}

/// The organizer credited in exported calendar documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: i64,
    pub name: String,
    pub link: String,
}

/// A not-yet-persisted event as held by the input form: free-text
/// fields plus independently picked date and time halves, any of which
/// may still be unpicked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub description: String,
    pub organizer_id: i64,
}

impl EventDraft {
    pub fn start(&self) -> Option<NaiveDateTime> {
        compose(self.start_date, self.start_time)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        compose(self.end_date, self.end_time)
    }

    pub fn validate(&self) -> Vec<Violation> {
        validate(&self.title, &self.location, self.start(), self.end())
    }

    /// Whether submitting this draft over `event` would change nothing.
    ///
    /// The comparison is field-by-field value equality on the composed
    /// instants, never on the raw picker values, so two pickings of the
    /// same wall-clock moment always compare equal. Edits that match
    /// are treated as successful without contacting the store.
    pub fn matches(&self, event: &Event) -> bool {
        self.title == event.title
            && self.location == event.location
            && self.start() == Some(event.start)
            && self.end() == Some(event.end)
            && self.multi == event.multi
            && self.description == event.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            title: "Sitsit".into(),
            location: "Kerhohuone".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            start_time: NaiveTime::from_hms_opt(18, 0, 0),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_time: NaiveTime::from_hms_opt(23, 0, 0),
            multi: false,
            description: "Kevään viimeiset sitsit".into(),
            organizer_id: 1,
        }
    }

    fn stored() -> Event {
        let d = draft();
        Event {
            id: 7,
            title: d.title.clone(),
            location: d.location.clone(),
            start: d.start().unwrap(),
            end: d.end().unwrap(),
            multi: d.multi,
            description: d.description.clone(),
            organizer_id: d.organizer_id,
        }
    }

    #[test]
    fn event_serializes_instants_in_transport_shape() {
        let json = serde_json::to_value(stored()).unwrap();

        assert_eq!(json["start"], "2024-5-1 18:00");
        assert_eq!(json["end"], "2024-5-1 23:00");
    }

    #[test]
    fn event_parses_transport_instants_back() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Sitsit",
            "location": "Kerhohuone",
            "start": "2024-5-1 18:00",
            "end": "2024-5-1 23:00",
            "multi": false,
            "organizer_id": 1,
        }))
        .unwrap();

        assert_eq!(event.start, stored().start);
        assert_eq!(event.description, "");
    }

    #[test]
    fn unchanged_draft_matches_the_stored_event() {
        assert!(draft().matches(&stored()));
    }

    #[test]
    fn changed_time_pick_breaks_the_match() {
        let mut edited = draft();
        edited.end_time = NaiveTime::from_hms_opt(23, 30, 0);

        assert!(!edited.matches(&stored()));
    }

    #[test]
    fn half_picked_draft_never_matches() {
        let mut edited = draft();
        edited.start_time = None;

        assert!(!edited.matches(&stored()));
    }

    #[test]
    fn draft_validation_reports_missing_composed_halves() {
        let mut partial = draft();
        partial.end_date = None;

        let kinds: Vec<_> = partial.validate().iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![crate::ViolationKind::MissingEnd]);
    }
}
