// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Month, NaiveDate, NaiveTime};
use clap_num::number_range;
use schedcc_core::{month_from_number, parse_date, parse_time};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a month number for clap, where 0 means any month.
pub fn parse_month(s: &str) -> Result<u8, String> {
    number_range(s, 0, 12)
}

pub fn month_of(n: u8) -> Result<Option<Month>, String> {
    month_from_number(n).map_err(|e| e.to_string())
}

pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

pub fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    match parse_time(s) {
        Ok(Some(t)) => Ok(t),
        Ok(None) => Err("time must not be empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Parses a `Yes`/`No` answer, as the form's dropdowns offer.
pub fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        _ => Err(format!("expected yes or no, got '{s}'")),
    }
}
