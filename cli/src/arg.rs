// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::{Month, NaiveDate, NaiveTime};
use clap::{Arg, ArgAction, ArgMatches, ValueHint, arg, value_parser};
use schedcc_core::{
    CommonView, EventConditions, EventKind, EventSource, EventStatus, Medium, Site, Trainer,
};

use crate::util::{
    OutputFormat, month_of, parse_date_arg, parse_month, parse_time_arg, parse_yes_no,
};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// The filter dropdowns of the search screen.
#[derive(Debug, Clone, Copy)]
pub struct FilterArgs;

impl FilterArgs {
    pub fn args() -> [Arg; 6] {
        [
            arg!(--trainer <TRAINER> "Only events of this trainer")
                .value_parser(value_parser!(Trainer))
                .ignore_case(true),
            arg!(--status <STATUS> "Only events with this status")
                .value_parser(value_parser!(EventStatus))
                .ignore_case(true),
            arg!(--source <SOURCE> "Only events from this source")
                .value_parser(value_parser!(EventSource))
                .ignore_case(true),
            arg!(-t --"type" <TYPE> "Only events of this type")
                .value_parser(value_parser!(EventKind))
                .ignore_case(true),
            arg!(-m --month <MONTH> "Only events in this month (1-12, 0 for all months)")
                .value_parser(parse_month),
            arg!(--view <VIEW> "Start from a common view; other filters refine it")
                .value_parser(value_parser!(CommonView)),
        ]
    }

    pub fn get_selection(matches: &ArgMatches) -> Result<FilterSelection, String> {
        let month = match matches.get_one::<u8>("month") {
            Some(n) => Some(month_of(*n)?),
            None => None,
        };
        Ok(FilterSelection {
            view: matches.get_one("view").copied(),
            trainer: matches.get_one("trainer").copied(),
            status: matches.get_one("status").copied(),
            source: matches.get_one("source").copied(),
            kind: matches.get_one("type").copied(),
            month,
        })
    }
}

/// The filters given on the command line, not yet tied to a date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub view: Option<CommonView>,
    pub trainer: Option<Trainer>,
    pub status: Option<EventStatus>,
    pub source: Option<EventSource>,
    pub kind: Option<EventKind>,

    /// `Some(None)` when `--month 0` asks for all months explicitly.
    pub month: Option<Option<Month>>,
}

impl FilterSelection {
    /// Builds the conditions, applying explicit filters on top of the view.
    pub fn resolve(&self, today: NaiveDate) -> EventConditions {
        let mut conds = self
            .view
            .map(|v| v.conditions(today))
            .unwrap_or_default();

        if let Some(trainer) = self.trainer {
            conds.trainer = Some(trainer);
        }
        if let Some(status) = self.status {
            conds.status = Some(status);
        }
        if let Some(source) = self.source {
            conds.source = Some(source);
        }
        if let Some(kind) = self.kind {
            conds.kind = Some(kind);
        }
        if let Some(month) = self.month {
            conds.month = month;
        }
        conds
    }
}

/// The fields of the new event form.
#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn args() -> Vec<Arg> {
        vec![
            arg!(client: <CLIENT> "Client name"),
            arg!(-d --date <DATE> "Date of the event (YYYY-MM-DD), defaults to today")
                .value_parser(parse_date_arg),
            arg!(--"all-day" <YES_NO> "Whether the event takes the whole day")
                .value_parser(parse_yes_no),
            arg!(--start <START> "Start time (HH:MM)").value_parser(parse_time_arg),
            arg!(--end <END> "End time (HH:MM)").value_parser(parse_time_arg),
            arg!(-t --"type" <TYPE> "Type of the event")
                .value_parser(value_parser!(EventKind))
                .ignore_case(true),
            arg!(--status <STATUS> "Status of the event")
                .value_parser(value_parser!(EventStatus))
                .ignore_case(true),
            arg!(--source <SOURCE> "Source of the event")
                .value_parser(value_parser!(EventSource))
                .ignore_case(true),
            arg!(--course <COURSE> "Course or description"),
            arg!(--trainer <TRAINER> "Trainer of the event")
                .value_parser(value_parser!(Trainer))
                .ignore_case(true),
            arg!(--medium <MEDIUM> "Delivery medium")
                .value_parser(value_parser!(Medium))
                .ignore_case(true),
            arg!(-l --location <SITE> "Site of the event, repeat for more sites")
                .value_parser(value_parser!(Site))
                .ignore_case(true)
                .action(ArgAction::Append),
            arg!(--invoiced <YES_NO> "Whether the event has been invoiced")
                .value_parser(parse_yes_no),
            arg!(--"billing-notes" <NOTES> "Billing notes"),
            arg!(--notes <NOTES> "Internal notes"),
        ]
    }

    pub fn get_client(matches: &ArgMatches) -> String {
        matches.get_one::<String>("client").cloned().unwrap_or_default()
    }

    pub fn get_date(matches: &ArgMatches) -> Option<NaiveDate> {
        matches.get_one("date").copied()
    }

    pub fn get_all_day(matches: &ArgMatches) -> Option<bool> {
        matches.get_one("all-day").copied()
    }

    pub fn get_start(matches: &ArgMatches) -> Option<NaiveTime> {
        matches.get_one("start").copied()
    }

    pub fn get_end(matches: &ArgMatches) -> Option<NaiveTime> {
        matches.get_one("end").copied()
    }

    pub fn get_kind(matches: &ArgMatches) -> Option<EventKind> {
        matches.get_one("type").copied()
    }

    pub fn get_status(matches: &ArgMatches) -> Option<EventStatus> {
        matches.get_one("status").copied()
    }

    pub fn get_source(matches: &ArgMatches) -> Option<EventSource> {
        matches.get_one("source").copied()
    }

    pub fn get_course(matches: &ArgMatches) -> Option<String> {
        matches.get_one("course").cloned()
    }

    pub fn get_trainer(matches: &ArgMatches) -> Option<Trainer> {
        matches.get_one("trainer").copied()
    }

    pub fn get_medium(matches: &ArgMatches) -> Option<Medium> {
        matches.get_one("medium").copied()
    }

    pub fn get_location(matches: &ArgMatches) -> Vec<Site> {
        matches
            .get_many::<Site>("location")
            .map(|a| a.copied().collect())
            .unwrap_or_default()
    }

    pub fn get_invoiced(matches: &ArgMatches) -> Option<bool> {
        matches.get_one("invoiced").copied()
    }

    pub fn get_billing_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("billing-notes").cloned()
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }
}

/// Where the export goes.
#[derive(Debug, Clone, Copy)]
pub struct ExportArgs;

impl ExportArgs {
    pub fn output() -> Arg {
        arg!(-o --output <DIR> "Directory to save filtered-events.csv into")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::DirPath)
            .conflicts_with("stdout")
    }

    pub fn get_output(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("output").cloned()
    }

    pub fn stdout() -> Arg {
        arg!(--stdout "Write the CSV to stdout instead of a file")
    }

    pub fn get_stdout(matches: &ArgMatches) -> bool {
        matches.get_flag("stdout")
    }
}
