//! Percentage math and time formatting for playback progress.

use std::time::Duration;

/// Whole percent of `offset` into a song lasting `duration_secs` seconds.
/// Floored at millisecond precision and capped at 100; a zero duration
/// counts as over.
pub(super) fn percent_complete(offset: Duration, duration_secs: u64) -> u8 {
    let duration_ms = duration_secs.saturating_mul(1000) as u128;
    if duration_ms == 0 {
        return 100;
    }
    let pct = offset.as_millis().saturating_mul(100) / duration_ms;
    pct.min(100) as u8
}

/// Format a duration as `M:SS`. Minutes are not zero-padded and may
/// exceed 59.
pub(super) fn format_mmss(d: Duration) -> String {
    let total = d.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format the time left as `-M:SS`, saturating at `-0:00` once `offset`
/// passes the song length.
pub(super) fn format_remaining(offset: Duration, duration_secs: u64) -> String {
    let left = duration_secs.saturating_sub(offset.as_secs());
    format!("-{}:{:02}", left / 60, left % 60)
}
