// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::{
    Config, Event, EventConditions, EventDraft, EventStore, ExportPayload, filter_events,
};

/// Scheduling command center core.
#[derive(Debug, Clone)]
pub struct SchedCc {
    now: DateTime<Local>,
    config: Config,
    store: EventStore,
}

impl SchedCc {
    /// Creates a new instance, loading the configured dataset or the sample bookings.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let store = match &config.data_path {
            Some(path) => EventStore::load(path)
                .await
                .map_err(|e| format!("Failed to load events from {}: {e}", path.display()))?,
            None => {
                tracing::info!("data_path not configured, using sample events");
                EventStore::sample()
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Creates an instance around an existing store.
    pub fn with_store(config: Config, store: EventStore) -> Self {
        Self {
            now: Local::now(),
            config,
            store,
        }
    }

    /// The current time of the instance.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Events matching the conditions, in store order.
    pub fn list_events(&self, conds: &EventConditions) -> Vec<&Event> {
        let events = filter_events(self.store.events(), conds);
        tracing::debug!(?conds, count = events.len(), "events filtered");
        events
    }

    /// CSV payload of the events matching the conditions.
    pub fn export(&self, conds: &EventConditions) -> ExportPayload {
        ExportPayload::csv(self.list_events(conds))
    }

    /// Directory the export is saved into.
    pub fn export_dir(&self) -> PathBuf {
        self.config
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// A draft holding the initial values of the new event form.
    pub fn default_event_draft(&self) -> EventDraft {
        EventDraft::default(self.now.date_naive())
    }

    /// Validates the draft as the next event. Nothing is saved.
    pub fn preview_event(&self, draft: EventDraft) -> Result<Event, Box<dyn Error>> {
        let event = self.store.preview(draft)?;
        tracing::info!(id = event.id, "event validated, not persisted");
        Ok(event)
    }
}
