// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use schedcc_core::{
    Event, EventKind, EventSource, EventStatus, EventTime, Medium, Site, Trainer, parse_date,
};

/// Creates an all-day online workshop on the given date.
///
/// # Example
///
/// ```ignore
/// let event = test_event(1, "2026-01-12");
/// ```
#[must_use]
pub fn test_event(id: u32, date: &str) -> Event {
    Event {
        id,
        date: parse_date(date).expect("fixture date must be valid"),
        time: EventTime::AllDay,
        kind: EventKind::Workshop,
        status: EventStatus::Confirmed,
        source: EventSource::Eqs,
        client: "Telstra".to_string(),
        course: "Leadership Boost".to_string(),
        trainer: Trainer::Dom,
        medium: Medium::Online,
        location: vec![Site::Syd],
        invoiced: false,
        billing_notes: None,
        notes: String::new(),
    }
}

/// Creates one event per month number, ids starting at 1.
#[must_use]
pub fn test_events_by_month(months: &[u32]) -> Vec<Event> {
    months
        .iter()
        .enumerate()
        .map(|(i, m)| test_event(i as u32 + 1, &format!("2026-{m:02}-15")))
        .collect()
}

/// A JSON dataset entry in the on-disk layout.
#[must_use]
pub fn test_event_json(id: u32, date: &str, trainer: &str) -> String {
    format!(
        r#"{{
    "id": {id},
    "Date": "{date}",
    "AllDay": false,
    "StartTime": "09:00",
    "EndTime": "12:00",
    "Type": "W",
    "Status": "Confirmed",
    "Source": "EQS",
    "Client": "Telstra",
    "Course": "Leadership Boost",
    "Trainer": "{trainer}",
    "Medium": "Online",
    "Location": ["Syd"],
    "Invoiced": false,
    "Notes": "Zoom link in invite"
}}"#
    )
}
