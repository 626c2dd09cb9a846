// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use tokio::fs;

use crate::{
    Event, EventDraft, EventError, EventKind, EventSource, EventStatus, EventTime, Medium, Site,
    Trainer,
};

/// In-memory list of events, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates a store from the events, rejecting duplicate ids.
    pub fn new(events: Vec<Event>) -> Result<Self, EventError> {
        let mut ids = HashSet::with_capacity(events.len());
        for event in &events {
            if !ids.insert(event.id) {
                return Err(EventError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// Loads a JSON array of events.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, EventError> {
        let content = fs::read_to_string(path).await?;
        let events: Vec<Event> = serde_json::from_str(&content)?;
        tracing::debug!(count = events.len(), "events loaded");
        Self::new(events)
    }

    /// The built-in sample bookings.
    pub fn sample() -> Self {
        Self {
            events: sample_events(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The id the next new event would get.
    pub fn next_id(&self) -> u32 {
        self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Validates a draft as the next event, without adding it to the store.
    pub fn preview(&self, draft: EventDraft) -> Result<Event, EventError> {
        draft.validate(self.next_id())
    }
}

fn sample_events() -> Vec<Event> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let span = |(h1, m1), (h2, m2)| EventTime::Span {
        start: NaiveTime::from_hms_opt(h1, m1, 0).unwrap_or_default(),
        end: NaiveTime::from_hms_opt(h2, m2, 0).unwrap_or_default(),
    };

    vec![
        Event {
            id: 1,
            date: date(2026, 1, 12),
            time: span((9, 0), (12, 0)),
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
            notes: "Zoom link in invite".to_string(),
        },
        Event {
            id: 2,
            date: date(2026, 1, 17),
            time: EventTime::AllDay,
            kind: EventKind::Coaching,
            status: EventStatus::Tentative,
            source: EventSource::Cce,
            client: "UNICEF".to_string(),
            course: "Check-in".to_string(),
            trainer: Trainer::James,
            medium: Medium::InPerson,
            location: vec![Site::Sg],
            invoiced: false,
            billing_notes: None,
            notes: "Awaiting confirmation".to_string(),
        },
        Event {
            id: 3,
            date: date(2026, 1, 25),
            time: span((14, 0), (15, 30)),
            kind: EventKind::Meeting,
            status: EventStatus::Offered,
            source: EventSource::Ctd,
            client: "EQ Strategist".to_string(),
            course: "Coord Review".to_string(),
            trainer: Trainer::Sue,
            medium: Medium::InPerson,
            location: vec![Site::Mel],
            invoiced: true,
            billing_notes: None,
            notes: "Boardroom 2".to_string(),
        },
        Event {
            id: 4,
            date: date(2026, 2, 3),
            time: span((10, 0), (13, 0)),
            kind: EventKind::Workshop,
            status: EventStatus::Confirmed,
            source: EventSource::Eqs,
            client: "ANZ".to_string(),
            course: "Agile Lab".to_string(),
            trainer: Trainer::Dom,
            medium: Medium::InPerson,
            location: vec![Site::Bne],
            invoiced: false,
            billing_notes: None,
            notes: "Materials printed".to_string(),
        },
    ]
}
