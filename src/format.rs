// src/format.rs

use chrono::{DateTime, TimeDelta, Utc};
use rusty_money::{iso, Money};

/// Shoes released within this many days of "now" are shown as new releases.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

pub fn new_release_window() -> TimeDelta {
    TimeDelta::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Formats an amount of US cents for display, e.g. `6000` -> `"$60.00"`.
/// Negative amounts are rendered as-is.
pub fn format_price(minor: i64) -> String {
    Money::from_minor(minor, iso::USD).to_string()
}

/// `pluralize("Color", 1)` -> `"1 Color"`, anything else gets an `s`.
pub fn pluralize(label: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {label}")
    } else {
        format!("{count} {label}s")
    }
}

/// True when `release` is less than `window` before `now`.
/// Release dates in the future also count as new.
pub fn is_new_shoe(release: DateTime<Utc>, now: DateTime<Utc>, window: TimeDelta) -> bool {
    now.signed_duration_since(release) < window
}
