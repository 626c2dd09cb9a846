// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::error::ParseEnumError;

/// The kind of an event, which decides how its title is built.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventKind {
    /// A training workshop, delivered in person or online.
    #[default]
    #[serde(rename = "W", alias = "Workshop")]
    #[cfg_attr(feature = "clap", clap(name = "workshop", alias = "w"))]
    Workshop,

    /// A coaching session with a single client.
    #[serde(rename = "C", alias = "Coaching")]
    #[cfg_attr(feature = "clap", clap(name = "coaching", alias = "c"))]
    Coaching,

    /// Any other meeting.
    #[serde(rename = "M", alias = "Meeting")]
    #[cfg_attr(feature = "clap", clap(name = "meeting", alias = "m"))]
    Meeting,
}

const KIND_WORKSHOP: &str = "W";
const KIND_COACHING: &str = "C";
const KIND_MEETING: &str = "M";

impl EventKind {
    /// All kinds, in the order the form lists them.
    pub const ALL: [Self; 3] = [Self::Workshop, Self::Coaching, Self::Meeting];

    /// The long, human readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Workshop => "Workshop",
            EventKind::Coaching => "Coaching",
            EventKind::Meeting => "Meeting",
        }
    }
}

/// Returns the single-letter code used in tables and exports.
impl AsRef<str> for EventKind {
    fn as_ref(&self) -> &str {
        match self {
            EventKind::Workshop => KIND_WORKSHOP,
            EventKind::Coaching => KIND_COACHING,
            EventKind::Meeting => KIND_MEETING,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(s) || a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("event type", s))
    }
}

/// The booking status of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventStatus {
    /// The client has confirmed the booking.
    #[default]
    Confirmed,

    /// A date has been offered but not accepted yet.
    Offered,

    /// Pencilled in, awaiting confirmation.
    Tentative,
}

const STATUS_CONFIRMED: &str = "Confirmed";
const STATUS_OFFERED: &str = "Offered";
const STATUS_TENTATIVE: &str = "Tentative";

impl EventStatus {
    /// All statuses, in the order the form lists them.
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Offered, Self::Tentative];
}

impl AsRef<str> for EventStatus {
    fn as_ref(&self) -> &str {
        match self {
            EventStatus::Confirmed => STATUS_CONFIRMED,
            EventStatus::Offered => STATUS_OFFERED,
            EventStatus::Tentative => STATUS_TENTATIVE,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("status", s))
    }
}

/// The referral channel an event came through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventSource {
    #[default]
    #[serde(rename = "EQS")]
    #[cfg_attr(feature = "clap", clap(name = "eqs"))]
    Eqs,

    #[serde(rename = "CCE")]
    #[cfg_attr(feature = "clap", clap(name = "cce"))]
    Cce,

    #[serde(rename = "CTD")]
    #[cfg_attr(feature = "clap", clap(name = "ctd"))]
    Ctd,
}

impl EventSource {
    pub const ALL: [Self; 3] = [Self::Eqs, Self::Cce, Self::Ctd];
}

impl AsRef<str> for EventSource {
    fn as_ref(&self) -> &str {
        match self {
            EventSource::Eqs => "EQS",
            EventSource::Cce => "CCE",
            EventSource::Ctd => "CTD",
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("source", s))
    }
}

/// The trainer roster.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Trainer {
    #[default]
    Dom,
    Sue,
    James,
    Kadi,
}

impl Trainer {
    pub const ALL: [Self; 4] = [Self::Dom, Self::Sue, Self::James, Self::Kadi];
}

impl AsRef<str> for Trainer {
    fn as_ref(&self) -> &str {
        match self {
            Trainer::Dom => "Dom",
            Trainer::Sue => "Sue",
            Trainer::James => "James",
            Trainer::Kadi => "Kadi",
        }
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Trainer {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("trainer", s))
    }
}

/// How an event is delivered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Medium {
    /// Face to face, rendered as `F2F`.
    #[default]
    #[serde(rename = "F2F", alias = "InPerson")]
    #[cfg_attr(feature = "clap", clap(name = "f2f", alias = "in-person"))]
    InPerson,

    #[serde(rename = "Online")]
    #[cfg_attr(feature = "clap", clap(name = "online"))]
    Online,
}

const MEDIUM_IN_PERSON: &str = "F2F";
const MEDIUM_ONLINE: &str = "Online";

impl Medium {
    pub const ALL: [Self; 2] = [Self::InPerson, Self::Online];
}

impl AsRef<str> for Medium {
    fn as_ref(&self) -> &str {
        match self {
            Medium::InPerson => MEDIUM_IN_PERSON,
            Medium::Online => MEDIUM_ONLINE,
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Medium {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f2f" | "inperson" | "in-person" => Ok(Medium::InPerson),
            "online" => Ok(Medium::Online),
            _ => Err(ParseEnumError::new("medium", s)),
        }
    }
}

/// A site where an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Site {
    Syd,
    Mel,
    Bne,
    #[serde(rename = "SG")]
    Sg,
    Msia,
}

impl Site {
    pub const ALL: [Self; 5] = [Self::Syd, Self::Mel, Self::Bne, Self::Sg, Self::Msia];
}

impl AsRef<str> for Site {
    fn as_ref(&self) -> &str {
        match self {
            Site::Syd => "Syd",
            Site::Mel => "Mel",
            Site::Bne => "Bne",
            Site::Sg => "SG",
            Site::Msia => "Msia",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Site {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("site", s))
    }
}
