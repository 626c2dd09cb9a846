// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::{EventConditions, EventKind, EventSource, EventStatus, Trainer};

/// The screens of the command center.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Quick actions and common views.
    Home,

    /// The new event form.
    New,

    /// Filters, results and export.
    #[default]
    Search,
}

/// The current tab and the filter selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub conds: EventConditions,
}

impl ViewState {
    pub fn with_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    pub fn with_conds(self, conds: EventConditions) -> Self {
        Self { conds, ..self }
    }

    /// Clears every filter, staying on the current tab.
    pub fn reset_filters(self) -> Self {
        self.with_conds(EventConditions::default())
    }
}

/// Saved filter presets shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CommonView {
    /// Dom's confirmed bookings in January.
    #[cfg_attr(feature = "clap", clap(name = "dom-confirmed-january"))]
    DomConfirmedJanuary,

    /// Tentative bookings of all trainers in the current month.
    #[cfg_attr(feature = "clap", clap(name = "tentative-this-month"))]
    TentativeThisMonth,

    /// Workshops referred through EQS.
    #[cfg_attr(feature = "clap", clap(name = "eqs-workshops"))]
    EqsWorkshops,
}

impl CommonView {
    pub const ALL: [Self; 3] = [
        Self::DomConfirmedJanuary,
        Self::TentativeThisMonth,
        Self::EqsWorkshops,
    ];

    /// Resolves the preset into filter conditions, relative to `today`.
    pub fn conditions(&self, today: NaiveDate) -> EventConditions {
        match self {
            CommonView::DomConfirmedJanuary => EventConditions {
                trainer: Some(Trainer::Dom),
                status: Some(EventStatus::Confirmed),
                month: Some(Month::January),
                ..Default::default()
            },
            CommonView::TentativeThisMonth => EventConditions {
                status: Some(EventStatus::Tentative),
                month: Month::try_from(today.month() as u8).ok(),
                ..Default::default()
            },
            CommonView::EqsWorkshops => EventConditions {
                source: Some(EventSource::Eqs),
                kind: Some(EventKind::Workshop),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for CommonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommonView::DomConfirmedJanuary => "Dom • Confirmed • January",
            CommonView::TentativeThisMonth => "All Trainers • Tentative • This Month",
            CommonView::EqsWorkshops => "Source: EQS • Workshops",
        })
    }
}
