//! Timestamp formatting for battle rows.

use chrono::{DateTime, Utc};

/// Turns a battle timestamp into display text.
pub trait TimeFormatter {
    /// Formats `timestamp` for display.
    fn format(&self, timestamp: DateTime<Utc>) -> String;
}

/// Formats timestamps relative to a fixed reference instant
/// ("just now", "5 min ago", "yesterday", ...).
///
/// The reference instant is injected so that a presenter call is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTimeFormatter {
    now: DateTime<Utc>,
}

impl RelativeTimeFormatter {
    /// Creates a formatter anchored at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a formatter anchored at the current wall-clock time.
    #[must_use]
    pub fn from_system_clock() -> Self {
        Self::new(Utc::now())
    }

    /// The reference instant.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

impl TimeFormatter for RelativeTimeFormatter {
    fn format(&self, timestamp: DateTime<Utc>) -> String {
        format_relative_time(timestamp, self.now)
    }
}

impl<F: Fn(DateTime<Utc>) -> String> TimeFormatter for F {
    fn format(&self, timestamp: DateTime<Utc>) -> String {
        self(timestamp)
    }
}

/// Formats the distance from `timestamp` to `now`.
///
/// Timestamps in the future read as "just now".
#[must_use]
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        units_ago(hours, "hour")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        units_ago(days, "day")
    } else if days < 30 {
        units_ago(days / 7, "week")
    } else if days < 365 {
        units_ago(days / 30, "month")
    } else {
        units_ago(days / 365, "year")
    }
}

fn units_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
