//! Formatting helpers for presenting report values.

use time::{macros::format_description, Date};

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

pub fn format_ratio(part: usize, whole: usize) -> String {
    format!("{part}/{whole}")
}

/// Long form used in the report header, e.g. `September 26, 2025`.
pub fn format_long_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_default()
}

/// Compact badge used on the sprint timeline, e.g. `Jul 28`.
pub fn format_date_badge(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_default()
}
