//! Playback time labels.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

/// Format seconds as `m:ss`. Unknown, non-finite, or non-positive input
/// renders as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
