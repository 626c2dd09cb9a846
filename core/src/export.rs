// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{DATE_FORMAT, Event, EventError, Site, TIME_FORMAT};

/// File name of the exported CSV.
pub const EXPORT_FILE_NAME: &str = "filtered-events.csv";

/// Content type of the exported CSV.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Column names of the CSV export, in order.
pub const CSV_HEADERS: [&str; 15] = [
    "Title",
    "Date",
    "AllDay",
    "StartTime",
    "EndTime",
    "Type",
    "Status",
    "Source",
    "Client",
    "Course",
    "Trainer",
    "Medium",
    "Location",
    "Invoiced",
    "Notes",
];

/// Renders the events as CSV: a bare header row, then one row per event with
/// every value quoted. Rows are separated by `\n` without a trailing newline.
pub fn to_csv<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    for event in events {
        let row: Vec<_> = csv_values(event).iter().map(|v| quote(v)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn csv_values(e: &Event) -> [String; 15] {
    let time = |t: Option<chrono::NaiveTime>| {
        t.map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default()
    };

    [
        e.title(),
        e.date.format(DATE_FORMAT).to_string(),
        yes_no(e.is_all_day()).to_string(),
        time(e.time.start()),
        time(e.time.end()),
        e.kind.to_string(),
        e.status.to_string(),
        e.source.to_string(),
        e.client.clone(),
        e.course.clone(),
        e.trainer.to_string(),
        e.medium.to_string(),
        join_sites(&e.location, ";"),
        yes_no(e.invoiced).to_string(),
        single_line(&e.notes),
    ]
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn join_sites(sites: &[Site], sep: &str) -> String {
    sites.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(sep)
}

/// Collapses every line break into a single space.
fn single_line(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// A CSV file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    /// Builds the CSV payload for the events.
    pub fn csv<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            content_type: EXPORT_CONTENT_TYPE,
            bytes: to_csv(events).into_bytes(),
        }
    }

    /// Saves the payload into `dir`, returning the path of the written file.
    ///
    /// The bytes go to a temporary sibling first, which is renamed into place
    /// once complete and removed if anything fails.
    #[tracing::instrument(skip(self), fields(file_name = self.file_name, len = self.bytes.len()))]
    pub async fn save(&self, dir: &Path) -> Result<PathBuf, EventError> {
        let path = dir.join(self.file_name);
        let tmp = dir.join(format!(".{}.tmp", self.file_name));

        let written = match fs::write(&tmp, &self.bytes).await {
            Ok(()) => fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            tracing::error!(path = %path.display(), err = %e, "failed to save export");
            if let Err(e) = fs::remove_file(&tmp).await {
                tracing::debug!(path = %tmp.display(), err = %e, "temporary file not removed");
            }
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), "export saved");
        Ok(path)
    }
}
