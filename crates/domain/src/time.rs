//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for history entries and light timers.
///
/// Serialized as Unix epoch milliseconds wherever it reaches the document.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Milliseconds elapsed from `since` to `until`, floored at zero.
#[must_use]
pub fn elapsed_millis(since: Timestamp, until: Timestamp) -> i64 {
    (until - since).num_milliseconds().max(0)
}
