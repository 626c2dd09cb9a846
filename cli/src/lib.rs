// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of the scheduling command center.

mod arg;
mod cli;
mod cmd_dashboard;
mod cmd_event;
mod cmd_generate_completion;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
