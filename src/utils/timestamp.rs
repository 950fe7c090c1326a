//! Wall-clock timestamps attached to messages.
//!
//! Each call to [`Timestamp::now`] reads the clock into its own local value,
//! so stamping is safe from any number of threads at once. Timestamps are only
//! meaningful for ordering within a single sender; the store's insertion order
//! is the only cross-sender order.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format used by the console.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Current time, clamped so it never precedes `previous`.
    ///
    /// The wall clock may step backwards (NTP, manual changes); a sender uses
    /// this to keep its own timestamps non-decreasing.
    pub fn now_after(previous: Option<Timestamp>) -> Self {
        let now = Self::now();
        match previous {
            Some(prev) if prev > now => prev,
            _ => now,
        }
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(value: DateTime<Local>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
