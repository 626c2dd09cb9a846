// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the scheduling command center: the booking model, the sample
//! store, filtering, titles and CSV export.

mod config;
mod error;
mod event;
mod export;
mod filter;
mod schedcc;
mod store;
mod title;
mod types;
mod view;

pub use crate::config::{APP_NAME, Config, get_config_dir};
pub use crate::error::{EventError, ParseEnumError};
pub use crate::event::{
    DATE_FORMAT, Event, EventDraft, EventTime, TIME_FORMAT, parse_date, parse_time,
};
pub use crate::export::{
    CSV_HEADERS, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, ExportPayload, to_csv,
};
pub use crate::filter::{EventConditions, filter_events, month_from_number, month_to_number};
pub use crate::schedcc::SchedCc;
pub use crate::store::EventStore;
pub use crate::title::Title;
pub use crate::types::{EventKind, EventSource, EventStatus, Medium, Site, Trainer};
pub use crate::view::{CommonView, Tab, ViewState};
