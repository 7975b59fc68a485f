//! Lifecycle status of projects and sprints, with the badge and timeline
//! classes each one renders with.

use serde::Deserialize;

/// Lifecycle status shared by projects and sprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    OnTrack,
    Completed,
    InProgress,
    Planned,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }

    /// Modifier for the `status-badge` block, e.g. `status-badge--on-track`.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::OnTrack => "status-badge status-badge--on-track",
            Self::Completed => "status-badge status-badge--completed",
            Self::InProgress => "status-badge status-badge--in-progress",
            Self::Planned => "status-badge status-badge--planned",
        }
    }

    /// Dot colour on the sprint timeline.
    pub fn timeline_dot_class(self) -> &'static str {
        match self {
            Self::Completed => "timeline__dot timeline__dot--completed",
            Self::InProgress => "timeline__dot timeline__dot--active",
            Self::OnTrack | Self::Planned => "timeline__dot",
        }
    }
}
