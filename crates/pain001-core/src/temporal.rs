//! # Temporal Types
//!
//! Creation timestamp for the group header (`GrpHdr/CreDtTm`).
//!
//! The timestamp is local wall-clock time truncated to whole seconds and
//! rendered without an offset (`2024-01-01T09:30:00`), the form the Swiss
//! implementation guidelines show for `ISODateTime`.

use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CREATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepts an optional fractional part when reading documents back.
const CREATION_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Message creation time with second-level precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationDateTime(NaiveDateTime);

impl CreationDateTime {
    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Wrap an explicit time. Sub-second precision is dropped.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.trunc_subsecs(0))
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// The `CreDtTm` text form.
    pub fn to_iso_string(&self) -> String {
        self.0.format(CREATION_FORMAT).to_string()
    }
}

impl fmt::Display for CreationDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

impl From<NaiveDateTime> for CreationDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}

impl Serialize for CreationDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for CreationDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(s.trim(), CREATION_PARSE_FORMAT)
            .map(Self::from_naive)
            .map_err(|e| serde::de::Error::custom(format!("invalid CreDtTm {s:?}: {e}")))
    }
}
