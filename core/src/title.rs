// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{Event, EventKind, Site};

impl Event {
    /// The display title of the event, e.g.
    /// `Confirmed-EQS-Telstra Leadership Boost (Online) Dom Syd`.
    pub fn title(&self) -> String {
        Title(self).to_string()
    }
}

/// Display adapter writing the title of an event.
#[derive(Debug, Clone, Copy)]
pub struct Title<'a>(pub &'a Event);

impl fmt::Display for Title<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        write!(f, "{}-{}-{} {}", e.status, e.source, e.client, e.course)?;
        match e.kind {
            EventKind::Workshop => write!(
                f,
                " ({}) {} {}",
                e.medium,
                e.trainer,
                Sites(&e.location)
            ),
            EventKind::Coaching => write!(f, " {}", e.trainer),
            EventKind::Meeting => write!(f, " {} {}", e.trainer, Sites(&e.location)),
        }
    }
}

/// Sites joined by a single space.
struct Sites<'a>(&'a [Site]);

impl fmt::Display for Sites<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, site) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{site}")?;
        }
        Ok(())
    }
}
