//! Facing-code labels.
//!
//! Turtles report their facing as an integer.  Codes 0–3 are the cardinal
//! directions; any other value is stored and echoed verbatim and only the
//! dashboard renders it as "Unknown".

/// Human-readable label for a facing code, for dashboard rendering only.
pub fn direction_label(dir: i64) -> &'static str {
    match dir {
        0 => "North",
        1 => "East",
        2 => "South",
        3 => "West",
        _ => "Unknown",
    }
}
