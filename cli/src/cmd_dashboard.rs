// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, ValueEnum};
use colored::Colorize;
use schedcc_core::{APP_NAME, CommonView, SchedCc};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "home";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("dashboard")
            .about("Show the home screen with quick actions and common views")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    pub async fn run(self, sc: &SchedCc) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating home screen...");
        println!("{}", Self::render(sc, sc.now().date_naive()));
        Ok(())
    }

    /// The home screen: quick actions, then each common view with its number
    /// of matching events as of `today`.
    pub fn render(sc: &SchedCc, today: NaiveDate) -> String {
        let mut lines = vec![format!("⚡ {}", "Quick Actions".bold())];
        for (cmd, about) in [
            ("new <CLIENT> ...", "Add a new event"),
            ("search", "Search events"),
            ("export", "Export filtered events as CSV"),
        ] {
            lines.push(format!(" {} {APP_NAME} {cmd:<18} {}", "►".green(), about.italic()));
        }

        lines.push(String::new());
        lines.push(format!("📌 {}", "Common Views".bold()));
        for view in CommonView::ALL {
            let count = sc.list_events(&view.conditions(today)).len();
            let flag = view
                .to_possible_value()
                .map(|v| format!("--view {}", v.get_name()))
                .unwrap_or_default();
            lines.push(format!(" {} {view} ({count})  {}", "►".green(), flag.dimmed()));
        }
        lines.push(format!(" {} {} event(s) in total", "►".green(), sc.store().len()));
        lines.join("\n")
    }
}
