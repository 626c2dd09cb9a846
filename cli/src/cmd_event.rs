// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{ArgMatches, Command};
use colored::Colorize;
use schedcc_core::{
    EventKind, EventSource, EventStatus, Medium, SchedCc, Site, Tab, Trainer, ViewState,
};

use crate::arg::{CommonArgs, EventArgs, ExportArgs, FilterArgs, FilterSelection};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub client: String,
    pub date: Option<NaiveDate>,
    pub all_day: Option<bool>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub kind: Option<EventKind>,
    pub status: Option<EventStatus>,
    pub source: Option<EventSource>,
    pub course: Option<String>,
    pub trainer: Option<Trainer>,
    pub medium: Option<Medium>,
    pub location: Vec<Site>,
    pub invoiced: Option<bool>,
    pub billing_notes: Option<String>,
    pub notes: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Fill in the new event form and preview the event")
            .args(EventArgs::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            client: EventArgs::get_client(matches),
            date: EventArgs::get_date(matches),
            all_day: EventArgs::get_all_day(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            kind: EventArgs::get_kind(matches),
            status: EventArgs::get_status(matches),
            source: EventArgs::get_source(matches),
            course: EventArgs::get_course(matches),
            trainer: EventArgs::get_trainer(matches),
            medium: EventArgs::get_medium(matches),
            location: EventArgs::get_location(matches),
            invoiced: EventArgs::get_invoiced(matches),
            billing_notes: EventArgs::get_billing_notes(matches),
            notes: EventArgs::get_notes(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, sc: &SchedCc) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filling new event form...");
        let mut draft = sc.default_event_draft();
        // A start or end time turns all-day off unless --all-day is given
        draft.all_day = self
            .all_day
            .unwrap_or(self.start.is_none() && self.end.is_none() && draft.all_day);
        draft.start = self.start;
        draft.end = self.end;
        draft.client = self.client;
        draft.location = self.location;
        draft.billing_notes = self.billing_notes;
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(kind) = self.kind {
            draft.kind = kind;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(source) = self.source {
            draft.source = source;
        }
        if let Some(course) = self.course {
            draft.course = course;
        }
        if let Some(trainer) = self.trainer {
            draft.trainer = trainer;
        }
        if let Some(medium) = self.medium {
            draft.medium = medium;
        }
        if let Some(invoiced) = self.invoiced {
            draft.invoiced = invoiced;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }

        let event = sc.preview_event(draft)?;
        let formatter = results_formatter(sc, self.output_format, true);
        println!("{}", formatter.format(&[&event]));
        if self.output_format == OutputFormat::Table {
            println!();
            println!("{}", "Preview only, the event has not been saved".italic());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventSearch {
    pub filters: FilterSelection,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("list")
            .about("Filter events and show the results")
            .args(FilterArgs::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            filters: FilterArgs::get_selection(matches)?,
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub async fn run(self, sc: &SchedCc) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        let view = ViewState::default()
            .with_tab(Tab::Search)
            .with_conds(self.filters.resolve(sc.now().date_naive()));

        println!("{}", self.render(sc, &view));
        Ok(())
    }

    /// The results screen for the view: a `Results (n)` header and the table,
    /// or the bare JSON array.
    pub fn render(&self, sc: &SchedCc, view: &ViewState) -> String {
        let events = sc.list_events(&view.conds);
        let formatter = results_formatter(sc, self.output_format, self.verbose);
        match self.output_format {
            OutputFormat::Json => formatter.format(&events).to_string(),
            OutputFormat::Table if events.is_empty() => format!(
                "{}\n{}",
                format!("Results ({})", events.len()).bold(),
                "No events found".italic()
            ),
            OutputFormat::Table => format!(
                "{}\n{}",
                format!("Results ({})", events.len()).bold(),
                formatter.format(&events)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventExport {
    pub filters: FilterSelection,
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

impl CmdEventExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export the filtered events as CSV")
            .args(FilterArgs::args())
            .arg(ExportArgs::output())
            .arg(ExportArgs::stdout())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            filters: FilterArgs::get_selection(matches)?,
            output: ExportArgs::get_output(matches),
            stdout: ExportArgs::get_stdout(matches),
        })
    }

    pub async fn run(self, sc: &SchedCc) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting events...");
        let conds = self.filters.resolve(sc.now().date_naive());
        let payload = sc.export(&conds);

        if self.stdout {
            write_raw(&mut io::stdout().lock(), &payload.bytes)?;
            return Ok(());
        }

        let dir = self.output.unwrap_or_else(|| sc.export_dir());
        let path = payload
            .save(&dir)
            .await
            .map_err(|e| format!("Failed to save export into {}: {e}", dir.display()))?;
        println!("{} {}", "Saved".green(), path.display());
        Ok(())
    }
}

/// Writes the payload as-is so the output can be piped into a file.
fn write_raw(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.flush()
}

fn results_formatter(sc: &SchedCc, output_format: OutputFormat, verbose: bool) -> EventFormatter {
    let columns = EventFormatter::results_columns(sc.config().date_format(), verbose);
    EventFormatter::new(columns, output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedcc_core::{Config, EventStore};

    fn sample() -> SchedCc {
        SchedCc::with_store(Config::default(), EventStore::sample())
    }

    #[test]
    fn test_parse_event_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEventNew::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "new",
                "Telstra",
                "--date",
                "2026-01-12",
                "--start",
                "09:00",
                "--end",
                "12:00",
                "--type",
                "workshop",
                "--course",
                "EQ Essentials",
                "--medium",
                "f2f",
                "-l",
                "syd",
                "--output-format",
                "json",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdEventNew::from(sub_matches);

        assert_eq!(parsed.client, "Telstra");
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2026, 1, 12));
        assert_eq!(parsed.start, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parsed.kind, Some(EventKind::Workshop));
        assert_eq!(parsed.medium, Some(Medium::InPerson));
        assert_eq!(parsed.location, vec![Site::Syd]);
        assert_eq!(parsed.all_day, None);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_event_add_alias() {
        let cmd = Command::new("test").subcommand(CmdEventNew::command());
        let matches = cmd.try_get_matches_from(["test", "add", "Acme"]).unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        assert_eq!(CmdEventNew::from(sub_matches).client, "Acme");
    }

    #[test]
    fn test_parse_event_new_requires_client() {
        let cmd = Command::new("test").subcommand(CmdEventNew::command());
        assert!(cmd.try_get_matches_from(["test", "new"]).is_err());
    }

    #[test]
    fn test_parse_event_search() {
        let cmd = Command::new("test").subcommand(CmdEventSearch::command());
        let matches = cmd
            .try_get_matches_from(["test", "list", "--source", "eqs", "-m", "1", "-v"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("search").unwrap();
        let parsed = CmdEventSearch::from(sub_matches).unwrap();

        assert_eq!(parsed.filters.source, Some(EventSource::Eqs));
        assert_eq!(parsed.filters.month, Some(Some(chrono::Month::January)));
        assert!(parsed.verbose);
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_event_search_rejects_month_13() {
        let cmd = Command::new("test").subcommand(CmdEventSearch::command());
        assert!(cmd.try_get_matches_from(["test", "search", "-m", "13"]).is_err());
    }

    #[test]
    fn test_parse_event_export() {
        let cmd = Command::new("test").subcommand(CmdEventExport::command());
        let matches = cmd
            .try_get_matches_from(["test", "export", "--trainer", "dom", "-o", "/tmp/out"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("export").unwrap();
        let parsed = CmdEventExport::from(sub_matches).unwrap();

        assert_eq!(parsed.filters.trainer, Some(Trainer::Dom));
        assert_eq!(parsed.output, Some(PathBuf::from("/tmp/out")));
        assert!(!parsed.stdout);
    }

    #[test]
    fn test_parse_event_export_output_conflicts_with_stdout() {
        let cmd = Command::new("test").subcommand(CmdEventExport::command());
        let res = cmd.try_get_matches_from(["test", "export", "--stdout", "-o", "/tmp/out"]);
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_run_export_saves_file() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CmdEventExport {
            filters: FilterSelection {
                trainer: Some(Trainer::Sue),
                ..Default::default()
            },
            output: Some(dir.path().to_path_buf()),
            stdout: false,
        };
        cmd.run(&sample()).await.unwrap();

        let csv = std::fs::read_to_string(dir.path().join("filtered-events.csv")).unwrap();
        assert_eq!(csv.lines().count(), 2);
        let title = EventStore::sample().get(3).unwrap().title();
        assert_eq!(title, "Offered-CTD-EQ Strategist Coord Review Sue Mel");
        assert!(csv.lines().nth(1).unwrap().starts_with(&format!("\"{title}\",")));
        assert!(!csv.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_stdout_matches_saved_file() {
        let sc = sample();
        let dir = tempfile::tempdir().unwrap();
        let payload = sc.export(&FilterSelection::default().resolve(sc.now().date_naive()));
        let path = payload.save(dir.path()).await.unwrap();

        let mut out = vec![];
        write_raw(&mut out, &payload.bytes).unwrap();
        assert_eq!(out, std::fs::read(path).unwrap());
        assert_ne!(out.last(), Some(&b'\n'));
    }

    fn search(filters: FilterSelection, output_format: OutputFormat) -> String {
        let sc = sample();
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let view = ViewState::default()
            .with_tab(Tab::Search)
            .with_conds(filters.resolve(today));
        let cmd = CmdEventSearch {
            filters,
            output_format,
            verbose: false,
        };
        cmd.render(&sc, &view)
    }

    #[test]
    fn test_render_search_by_month() {
        let filters = FilterSelection {
            month: Some(Some(chrono::Month::January)),
            ..Default::default()
        };
        let screen = search(filters, OutputFormat::Table);
        assert!(screen.contains("Results (3)"));
        assert!(screen.contains("Confirmed-EQS-"));
        assert!(!screen.contains("ANZ"));
    }

    #[test]
    fn test_render_search_no_match() {
        let filters = FilterSelection {
            trainer: Some(Trainer::Kadi),
            ..Default::default()
        };
        let screen = search(filters, OutputFormat::Table);
        assert!(screen.contains("Results (0)"));
        assert!(screen.contains("No events found"));
    }

    #[test]
    fn test_render_search_json_has_no_header() {
        let filters = FilterSelection {
            source: Some(EventSource::Eqs),
            ..Default::default()
        };
        let screen = search(filters, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&screen).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_run_new_rejects_invalid_draft() {
        let cmd = Command::new("test").subcommand(CmdEventNew::command());
        let matches = cmd
            .try_get_matches_from(["test", "new", "Acme", "--start", "12:00", "--end", "09:00"])
            .unwrap();
        let parsed = CmdEventNew::from(matches.subcommand_matches("new").unwrap());
        assert!(parsed.run(&sample()).await.is_err());
    }
}
