// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Month, NaiveDate, NaiveTime};

use crate::{EventError, EventKind, EventSource, EventStatus, Medium, Site, Trainer};

/// Format of dates in datasets, tables and exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of clock times in datasets, tables and exports.
pub const TIME_FORMAT: &str = "%H:%M";

/// A single booking: a workshop, a coaching session or a meeting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "EventRaw", into = "EventRaw")]
pub struct Event {
    /// Unique identifier within a store.
    pub id: u32,

    /// The calendar date of the event.
    pub date: NaiveDate,

    /// Whether the event takes the whole day or a time span.
    pub time: EventTime,

    pub kind: EventKind,
    pub status: EventStatus,
    pub source: EventSource,

    /// Name of the client organization.
    pub client: String,

    /// Course title or a short description.
    pub course: String,

    pub trainer: Trainer,
    pub medium: Medium,

    /// Sites of the event, in the order they were picked.
    pub location: Vec<Site>,

    pub invoiced: bool,

    /// Billing notes, kept off the CSV export.
    pub billing_notes: Option<String>,

    /// Internal notes, may span multiple lines.
    pub notes: String,
}

impl Event {
    /// The month the event falls in.
    pub fn month(&self) -> Month {
        // month() is always in 1..=12
        Month::try_from(self.date.month() as u8).unwrap_or(Month::January)
    }

    /// Whether the event takes the whole day.
    pub fn is_all_day(&self) -> bool {
        self.time.is_all_day()
    }
}

/// The time of day an event occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// The whole day, no clock times.
    AllDay,

    /// From `start` to `end` on the event date.
    Span { start: NaiveTime, end: NaiveTime },
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::AllDay)
    }

    pub fn start(&self) -> Option<NaiveTime> {
        match self {
            EventTime::AllDay => None,
            EventTime::Span { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveTime> {
        match self {
            EventTime::AllDay => None,
            EventTime::Span { end, .. } => Some(*end),
        }
    }
}

/// Draft for an event, as entered in the new event form.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub date: NaiveDate,
    pub all_day: bool,

    /// Start time, ignored for all day events.
    pub start: Option<NaiveTime>,

    /// End time, ignored for all day events.
    pub end: Option<NaiveTime>,

    pub kind: EventKind,
    pub status: EventStatus,
    pub source: EventSource,
    pub client: String,
    pub course: String,
    pub trainer: Trainer,
    pub medium: Medium,
    pub location: Vec<Site>,
    pub invoiced: bool,
    pub billing_notes: Option<String>,
    pub notes: String,
}

impl EventDraft {
    /// Creates a draft holding the initial values of the form.
    pub fn default(date: NaiveDate) -> Self {
        Self {
            date,
            all_day: true,
            start: None,
            end: None,
            kind: EventKind::default(),
            status: EventStatus::default(),
            source: EventSource::default(),
            client: String::new(),
            course: String::new(),
            trainer: Trainer::default(),
            medium: Medium::default(),
            location: Vec::new(),
            invoiced: false,
            billing_notes: None,
            notes: String::new(),
        }
    }

    /// Validates the draft and turns it into an event with the given id.
    pub fn validate(self, id: u32) -> Result<Event, EventError> {
        let time = match (self.all_day, self.start, self.end) {
            (true, _, _) => EventTime::AllDay,
            (false, Some(start), Some(end)) if end < start => {
                return Err(EventError::EndBeforeStart {
                    start: start.format(TIME_FORMAT).to_string(),
                    end: end.format(TIME_FORMAT).to_string(),
                });
            }
            (false, Some(start), Some(end)) => EventTime::Span { start, end },
            (false, _, _) => return Err(EventError::MissingTime),
        };

        let client = self.client.trim().to_string();
        if client.is_empty() {
            return Err(EventError::EmptyField("client"));
        }

        let mut location = Vec::with_capacity(self.location.len());
        for site in self.location {
            if !location.contains(&site) {
                location.push(site);
            }
        }
        if self.medium == Medium::InPerson && location.is_empty() {
            return Err(EventError::MissingLocation);
        }

        Ok(Event {
            id,
            date: self.date,
            time,
            kind: self.kind,
            status: self.status,
            source: self.source,
            client,
            course: self.course.trim().to_string(),
            trainer: self.trainer,
            medium: self.medium,
            location,
            invoiced: self.invoiced,
            billing_notes: self.billing_notes.filter(|a| !a.trim().is_empty()),
            notes: self.notes,
        })
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| EventError::InvalidDate(s.to_string()))
}

/// Parses a `HH:MM` time. An empty string means no time.
pub fn parse_time(s: &str) -> Result<Option<NaiveTime>, EventError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map(Some)
        .map_err(|_| EventError::InvalidTime(s.to_string()))
}

/// On-disk layout of an event, keyed like the exported CSV columns.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EventRaw {
    #[serde(rename = "id")]
    id: u32,
    date: NaiveDate,
    #[serde(default)]
    all_day: bool,
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    end_time: String,
    #[serde(rename = "Type")]
    kind: EventKind,
    status: EventStatus,
    source: EventSource,
    client: String,
    course: String,
    trainer: Trainer,
    medium: Medium,
    #[serde(default)]
    location: Vec<Site>,
    #[serde(default)]
    invoiced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    billing_notes: Option<String>,
    #[serde(default)]
    notes: String,
}

impl TryFrom<EventRaw> for Event {
    type Error = EventError;

    fn try_from(raw: EventRaw) -> Result<Self, Self::Error> {
        let time = if raw.all_day {
            EventTime::AllDay
        } else {
            match (parse_time(&raw.start_time)?, parse_time(&raw.end_time)?) {
                (Some(start), Some(end)) => EventTime::Span { start, end },
                _ => return Err(EventError::MissingTime),
            }
        };

        Ok(Event {
            id: raw.id,
            date: raw.date,
            time,
            kind: raw.kind,
            status: raw.status,
            source: raw.source,
            client: raw.client,
            course: raw.course,
            trainer: raw.trainer,
            medium: raw.medium,
            location: raw.location,
            invoiced: raw.invoiced,
            billing_notes: raw.billing_notes,
            notes: raw.notes,
        })
    }
}

impl From<Event> for EventRaw {
    fn from(event: Event) -> Self {
        let fmt = |t: Option<NaiveTime>| t.map(|t| t.format(TIME_FORMAT).to_string());
        EventRaw {
            id: event.id,
            date: event.date,
            all_day: event.time.is_all_day(),
            start_time: fmt(event.time.start()).unwrap_or_default(),
            end_time: fmt(event.time.end()).unwrap_or_default(),
            kind: event.kind,
            status: event.status,
            source: event.source,
            client: event.client,
            course: event.course,
            trainer: event.trainer,
            medium: event.medium,
            location: event.location,
            invoiced: event.invoiced,
            billing_notes: event.billing_notes,
            notes: event.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        parse_time(s).unwrap().unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft {
            client: "ANZ".to_string(),
            course: "Agile Lab".to_string(),
            location: vec![Site::Bne],
            ..EventDraft::default(date("2026-02-03"))
        }
    }

    #[test]
    fn test_default_draft_matches_form() {
        let d = EventDraft::default(date("2026-03-01"));
        assert!(d.all_day);
        assert_eq!(d.kind, EventKind::Workshop);
        assert_eq!(d.status, EventStatus::Confirmed);
        assert_eq!(d.source, EventSource::Eqs);
        assert_eq!(d.trainer, Trainer::Dom);
        assert_eq!(d.medium, Medium::InPerson);
        assert!(!d.invoiced);
    }

    #[test]
    fn test_validate_all_day_drops_times() {
        let d = EventDraft {
            start: Some(time("09:00")),
            ..draft()
        };
        let event = d.validate(7).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.time, EventTime::AllDay);
    }

    #[test]
    fn test_validate_timed_requires_both_times() {
        let d = EventDraft {
            all_day: false,
            start: Some(time("09:00")),
            ..draft()
        };
        assert!(matches!(d.validate(1), Err(EventError::MissingTime)));
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let d = EventDraft {
            all_day: false,
            start: Some(time("13:00")),
            end: Some(time("10:00")),
            ..draft()
        };
        let err = d.validate(1).unwrap_err();
        assert_eq!(err.to_string(), "end time 10:00 is before start time 13:00");
    }

    #[test]
    fn test_validate_in_person_needs_location() {
        let d = EventDraft {
            location: vec![],
            ..draft()
        };
        assert!(matches!(d.validate(1), Err(EventError::MissingLocation)));

        let d = EventDraft {
            location: vec![],
            medium: Medium::Online,
            ..draft()
        };
        assert!(d.validate(1).is_ok());
    }

    #[test]
    fn test_validate_requires_client() {
        let d = EventDraft {
            client: "  ".to_string(),
            ..draft()
        };
        assert!(matches!(d.validate(1), Err(EventError::EmptyField("client"))));
    }

    #[test]
    fn test_validate_dedups_location_in_order() {
        let d = EventDraft {
            location: vec![Site::Mel, Site::Syd, Site::Mel],
            ..draft()
        };
        assert_eq!(d.validate(1).unwrap().location, vec![Site::Mel, Site::Syd]);
    }

    #[test]
    fn test_parse_date_and_time() {
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("12/01/2026").is_err());
        assert_eq!(parse_time("").unwrap(), None);
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_month() {
        let event = draft().validate(1).unwrap();
        assert_eq!(event.month(), Month::February);
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "id": 3,
            "Date": "2026-01-25",
            "AllDay": false,
            "StartTime": "14:00",
            "EndTime": "15:30",
            "Type": "M",
            "Status": "Offered",
            "Source": "CTD",
            "Client": "EQ Strategist",
            "Course": "Coord Review",
            "Trainer": "Sue",
            "Medium": "F2F",
            "Location": ["Mel"],
            "Invoiced": true,
            "Notes": "Boardroom 2"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Meeting);
        assert_eq!(
            event.time,
            EventTime::Span {
                start: time("14:00"),
                end: time("15:30")
            }
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["StartTime"], "14:00");
        assert_eq!(value["Type"], "M");
        assert!(value.get("BillingNotes").is_none());
    }

    #[test]
    fn test_json_timed_without_times_is_rejected() {
        let json = r#"{
            "id": 1, "Date": "2026-01-25", "AllDay": false,
            "Type": "M", "Status": "Offered", "Source": "CTD",
            "Client": "X", "Course": "Y", "Trainer": "Sue", "Medium": "F2F"
        }"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
