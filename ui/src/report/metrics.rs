//! Aggregate figures shown on the executive summary cards.

use super::{ProjectRecord, SprintRecord, Status};

/// Shown in place of a sprint name when nothing is in progress.
pub const NO_CURRENT_SPRINT: &str = "N/A";

/// Pure function of the project and sprint lists. Never stored; callers
/// re-derive it from the dataset whenever they need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedMetrics {
    /// Mean automation savings over projects that report any, rounded.
    pub avg_automation: u8,
    /// Mean manual savings over projects that report any, rounded.
    pub avg_manual: u8,
    pub on_track: usize,
    pub total_projects: usize,
    pub completed_sprints: usize,
    /// First sprint still in progress, in timeline order.
    pub current_sprint: Option<String>,
}

impl DerivedMetrics {
    pub fn derive(projects: &[ProjectRecord], sprints: &[SprintRecord]) -> Self {
        Self {
            avg_automation: average_reported(projects.iter().map(|p| p.auto_savings)),
            avg_manual: average_reported(projects.iter().map(|p| p.manual_savings)),
            on_track: projects
                .iter()
                .filter(|p| p.status == Status::OnTrack)
                .count(),
            total_projects: projects.len(),
            completed_sprints: sprints
                .iter()
                .filter(|s| s.status == Status::Completed)
                .count(),
            current_sprint: sprints
                .iter()
                .find(|s| s.status == Status::InProgress)
                .map(|s| s.name.clone()),
        }
    }

    pub fn current_sprint_label(&self) -> &str {
        self.current_sprint.as_deref().unwrap_or(NO_CURRENT_SPRINT)
    }

    pub fn all_on_track(&self) -> bool {
        self.total_projects > 0 && self.on_track == self.total_projects
    }
}

/// Sum of all values over the count of nonzero values, rounded half away
/// from zero. Zero means "not reported" and stays out of the denominator.
fn average_reported(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, reported) = values.fold((0u32, 0u32), |(sum, reported), value| {
        (sum + u32::from(value), reported + u32::from(value > 0))
    });

    if reported == 0 {
        return 0;
    }

    (f64::from(sum) / f64::from(reported)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{project, sprint};

    fn savings(pairs: &[(u8, u8)]) -> Vec<ProjectRecord> {
        pairs
            .iter()
            .enumerate()
            .map(|(idx, (auto, manual))| {
                project(&format!("p{idx}"), Status::OnTrack, *auto, *manual)
            })
            .collect()
    }

    #[test]
    fn averages_skip_unreported_projects() {
        let projects = savings(&[(20, 0), (25, 20), (15, 0), (0, 20), (0, 0)]);
        let metrics = DerivedMetrics::derive(&projects, &[]);
        assert_eq!(metrics.avg_automation, 20);
        assert_eq!(metrics.avg_manual, 20);
        assert_eq!(metrics.total_projects, 5);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 25 / 2 = 12.5
        let projects = savings(&[(10, 0), (15, 0)]);
        assert_eq!(DerivedMetrics::derive(&projects, &[]).avg_automation, 13);

        // 31 / 3 = 10.33
        let projects = savings(&[(10, 0), (10, 0), (11, 0)]);
        assert_eq!(DerivedMetrics::derive(&projects, &[]).avg_automation, 10);
    }

    #[test]
    fn empty_collections_do_not_fault() {
        let metrics = DerivedMetrics::derive(&[], &[]);
        assert_eq!(metrics.avg_automation, 0);
        assert_eq!(metrics.avg_manual, 0);
        assert_eq!(metrics.on_track, 0);
        assert_eq!(metrics.completed_sprints, 0);
        assert_eq!(metrics.current_sprint_label(), NO_CURRENT_SPRINT);
        assert!(!metrics.all_on_track());
    }

    #[test]
    fn all_zero_column_averages_to_zero() {
        let projects = savings(&[(0, 40), (0, 0), (0, 10)]);
        let metrics = DerivedMetrics::derive(&projects, &[]);
        assert_eq!(metrics.avg_automation, 0);
        assert_eq!(metrics.avg_manual, 25);
    }

    #[test]
    fn averages_stay_within_percent_range() {
        let projects = savings(&[(100, 100), (100, 1), (1, 100)]);
        let metrics = DerivedMetrics::derive(&projects, &[]);
        assert!(metrics.avg_automation <= 100);
        assert!(metrics.avg_manual <= 100);
        assert_eq!(metrics.avg_automation, 67);
    }

    #[test]
    fn counts_on_track_projects() {
        let projects = vec![
            project("a", Status::OnTrack, 0, 0),
            project("b", Status::Planned, 0, 0),
            project("c", Status::OnTrack, 0, 0),
        ];
        let metrics = DerivedMetrics::derive(&projects, &[]);
        assert_eq!(metrics.on_track, 2);
        assert!(!metrics.all_on_track());
    }

    #[test]
    fn sprint_progress_uses_first_in_progress() {
        let sprints = vec![
            sprint("Sprint 0", Status::Completed),
            sprint("Sprint 1", Status::Completed),
            sprint("Sprint 2", Status::Completed),
            sprint("Sprint 3", Status::InProgress),
            sprint("Sprint 4", Status::Planned),
        ];
        let metrics = DerivedMetrics::derive(&[], &sprints);
        assert_eq!(metrics.completed_sprints, 3);
        assert_eq!(metrics.current_sprint.as_deref(), Some("Sprint 3"));
    }

    #[test]
    fn derivation_is_repeatable() {
        let projects = savings(&[(20, 0), (25, 20)]);
        let sprints = vec![sprint("Sprint 0", Status::InProgress)];
        assert_eq!(
            DerivedMetrics::derive(&projects, &sprints),
            DerivedMetrics::derive(&projects, &sprints)
        );
    }
}
