// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use schedcc_core::{Event, EventStatus, EventTime, TIME_FORMAT};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>, format: OutputFormat) -> Self {
        Self { columns, format }
    }

    /// The columns of the results table.
    pub fn results_columns(date_format: &str, verbose: bool) -> Vec<EventColumn> {
        let date_format = date_format.to_string();
        if verbose {
            vec![
                EventColumn::Id,
                EventColumn::Title,
                EventColumn::Date { date_format },
                EventColumn::Time,
                EventColumn::Type,
                EventColumn::Status,
                EventColumn::Source,
                EventColumn::Trainer,
                EventColumn::Location,
                EventColumn::Invoiced,
                EventColumn::Notes,
            ]
        } else {
            vec![
                EventColumn::Title,
                EventColumn::Date { date_format },
                EventColumn::Time,
                EventColumn::Type,
                EventColumn::Status,
                EventColumn::Source,
                EventColumn::Trainer,
                EventColumn::Location,
            ]
        }
    }

    pub fn format<'a>(&'a self, events: &'a [&'a Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.events)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Title,
    Date { date_format: String },
    Time,
    Type,
    Status,
    Source,
    Trainer,
    Location,
    Invoiced,
    Notes,
}

impl<'e> TableColumn<&'e Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Date { .. } => "Date",
            Self::Time => "Time",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Source => "Source",
            Self::Trainer => "Trainer",
            Self::Location => "Location",
            Self::Invoiced => "Invoiced",
            Self::Notes => "Notes",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a &'e Event) -> Cow<'a, str> {
        match self {
            Self::Id => event.id.to_string().into(),
            Self::Title => event.title().into(),
            Self::Date { date_format } => event.date.format(date_format).to_string().into(),
            Self::Time => format_time(&event.time).into(),
            Self::Type => event.kind.as_ref().into(),
            Self::Status => event.status.as_ref().into(),
            Self::Source => event.source.as_ref().into(),
            Self::Trainer => event.trainer.as_ref().into(),
            Self::Location => event
                .location
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
            Self::Invoiced => if event.invoiced { "Yes" } else { "No" }.into(),
            Self::Notes => event.notes.replace(['\r', '\n'], " ").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &&'e Event) -> Option<Color> {
        match self {
            Self::Status => Some(match event.status {
                EventStatus::Confirmed => Color::Green,
                EventStatus::Offered => Color::Yellow,
                EventStatus::Tentative => Color::Cyan,
            }),
            _ => None,
        }
    }
}

fn format_time(time: &EventTime) -> String {
    match time {
        EventTime::AllDay => "All day".to_string(),
        EventTime::Span { start, end } => format!(
            "{}–{}",
            start.format(TIME_FORMAT),
            end.format(TIME_FORMAT)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedcc_core::EventStore;

    #[test]
    fn test_format_time() {
        let store = EventStore::sample();
        assert_eq!(format_time(&store.events()[0].time), "09:00–12:00");
        assert_eq!(format_time(&store.events()[1].time), "All day");
    }

    #[test]
    fn test_columns_format_sample() {
        let store = EventStore::sample();
        let event = &store.events()[2];
        let date = EventColumn::Date {
            date_format: "%d/%m/%Y".to_string(),
        };
        assert_eq!(date.format(&event), "25/01/2026");
        assert_eq!(EventColumn::Type.format(&event), "M");
        assert_eq!(EventColumn::Location.format(&event), "Mel");
        assert_eq!(EventColumn::Invoiced.format(&event), "Yes");
        assert_eq!(
            EventColumn::Title.format(&event),
            "Offered-CTD-EQ Strategist Coord Review Sue Mel"
        );
    }

    #[test]
    fn test_json_output() {
        let store = EventStore::sample();
        let events: Vec<_> = store.events().iter().collect();
        let columns = EventFormatter::results_columns("%Y-%m-%d", false);
        let formatter = EventFormatter::new(columns, OutputFormat::Json);

        let out = formatter.format(&events).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[1]["Time"], "All day");
        assert_eq!(value[3]["Date"], "2026-02-03");
    }
}
