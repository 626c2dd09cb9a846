// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Month;

use crate::{Event, EventError, EventKind, EventSource, EventStatus, Trainer};

/// Conditions for filtering events. `None` matches any value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventConditions {
    pub trainer: Option<Trainer>,
    pub status: Option<EventStatus>,
    pub source: Option<EventSource>,
    pub kind: Option<EventKind>,

    /// The calendar month of the event date.
    pub month: Option<Month>,
}

impl EventConditions {
    /// Whether every condition is "any".
    pub fn is_any(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the event satisfies all the set conditions.
    pub fn matches(&self, event: &Event) -> bool {
        self.trainer.is_none_or(|a| a == event.trainer)
            && self.status.is_none_or(|a| a == event.status)
            && self.source.is_none_or(|a| a == event.source)
            && self.kind.is_none_or(|a| a == event.kind)
            && self.month.is_none_or(|a| a == event.month())
    }
}

/// Filters the events by the conditions, keeping their original order.
pub fn filter_events<'a>(events: &'a [Event], conds: &EventConditions) -> Vec<&'a Event> {
    events.iter().filter(|e| conds.matches(e)).collect()
}

/// Converts a month number, where 0 means any month.
pub fn month_from_number(n: u8) -> Result<Option<Month>, EventError> {
    match n {
        0 => Ok(None),
        1..=12 => Month::try_from(n)
            .map(Some)
            .map_err(|_| EventError::InvalidMonth(n)),
        _ => Err(EventError::InvalidMonth(n)),
    }
}

/// Converts a month back to its number, 0 for any month.
pub fn month_to_number(month: Option<Month>) -> u8 {
    month.map_or(0, |m| m.number_from_month() as u8)
}
