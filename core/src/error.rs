// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

/// Failure to parse one of the closed enumerations from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The name of the enumeration that failed to parse.
    pub fn kind(&self) -> &str {
        self.kind
    }
}

/// Errors raised while building, loading or exporting events.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// A timed event is missing its start or end time.
    #[error("start and end time are required unless the event is all day")]
    MissingTime,

    /// The end time comes before the start time.
    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: String, end: String },

    /// An in-person event has no site.
    #[error("at least one location is required for in-person events")]
    MissingLocation,

    /// A required text field is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The month filter is outside 0..=12.
    #[error("invalid month: {0}, expected 0 (any) or 1-12")]
    InvalidMonth(u8),

    /// Two records in a dataset share an id.
    #[error("duplicate event id: {0}")]
    DuplicateId(u32),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error(transparent)]
    Parse(#[from] ParseEnumError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
