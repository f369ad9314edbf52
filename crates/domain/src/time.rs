//! Timestamp helpers for the `created` / `updated` audit fields.

use chrono::{DateTime, Utc};

/// UTC timestamp used for resource audit fields.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp the way the console tables show it (minute precision).
#[must_use]
pub fn display(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}
