//! Shared UI crate for Statusdeck. Report data, view state and every dashboard
//! view live here; the platform crates only launch [`Dashboard`].

pub mod core;
pub mod dashboard;
pub mod report;
pub mod views;

pub use views::Dashboard;

/// Unified theme, inlined by both the web and desktop shells.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
