//! Embedded report document and its validation.
//!
//! The report lives in `ui/report/status-report.json` and is compiled into the
//! binary via `rust-embed`. Decoding happens once (see `report::builtin`);
//! validation rejects values the views cannot render faithfully.

use std::collections::HashSet;

use rust_embed::Embed;
use thiserror::Error;

use super::{ReportDataset, Status};

/// File name of the shipped report inside the embedded folder.
pub(crate) const REPORT_FILE: &str = "status-report.json";

#[derive(Embed)]
#[folder = "report"]
struct ReportAssets;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("embedded report `{0}` is missing from this build")]
    Missing(&'static str),

    #[error("report document could not be decoded: {0}")]
    Decode(String),

    #[error("project at position {0} has an empty id")]
    EmptyProjectId(usize),

    #[error("project id `{0}` appears more than once")]
    DuplicateProjectId(String),

    #[error("project `{id}` reports {field} of {value}%, above 100%")]
    PercentOutOfRange {
        id: String,
        field: &'static str,
        value: u8,
    },

    #[error("sprint `{0}` is marked on track; sprints are completed, in progress or planned")]
    SprintOnTrack(String),
}

impl ReportDataset {
    /// Decode and validate the report embedded in this build.
    pub fn load_embedded() -> Result<Self, ReportError> {
        let file = ReportAssets::get(REPORT_FILE).ok_or(ReportError::Missing(REPORT_FILE))?;
        Self::from_json(&file.data)
    }

    /// Decode and validate a report document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ReportError> {
        let dataset: Self =
            serde_json::from_slice(bytes).map_err(|err| ReportError::Decode(err.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(ReportError::EmptyProjectId(index));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ReportError::DuplicateProjectId(project.id.clone()));
            }
            for (field, value) in [
                ("automation savings", project.auto_savings),
                ("manual savings", project.manual_savings),
            ] {
                if value > 100 {
                    return Err(ReportError::PercentOutOfRange {
                        id: project.id.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        if let Some(sprint) = self
            .sprints
            .iter()
            .find(|sprint| sprint.status == Status::OnTrack)
        {
            return Err(ReportError::SprintOnTrack(sprint.name.clone()));
        }

        Ok(())
    }
}

/// `YYYY-MM-DD` dates.
pub(crate) mod iso_date {
    use serde::{de::Error, Deserialize, Deserializer};
    use time::{macros::format_description, Date};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, format_description!("[year]-[month]-[day]"))
            .map_err(|err| D::Error::custom(format!("invalid date `{raw}`: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(projects: serde_json::Value, sprints: serde_json::Value) -> Vec<u8> {
        json!({
            "header": {
                "title": "Test report",
                "week_label": "Week 0101",
                "report_date": "2025-01-01",
                "overall_status": "on-track",
                "report_out_date": "2025-01-15"
            },
            "projects": projects,
            "sprints": sprints,
            "calculation_methods": []
        })
        .to_string()
        .into_bytes()
    }

    fn project(id: &str, auto: u32, manual: u32) -> serde_json::Value {
        json!({
            "id": id,
            "name": id.to_uppercase(),
            "status": "on-track",
            "auto_savings": auto,
            "manual_savings": manual,
            "coverage": "",
            "lead": "",
            "next_milestone": "",
            "description": "",
            "sprint_focus": ""
        })
    }

    #[test]
    fn embedded_report_is_present() {
        assert!(ReportAssets::get(REPORT_FILE).is_some());
    }

    #[test]
    fn minimal_document_decodes_with_defaults() {
        let bytes = document(json!([project("a", 10, 0)]), json!([]));
        let dataset = ReportDataset::from_json(&bytes).unwrap();
        assert_eq!(dataset.projects.len(), 1);
        assert!(dataset.projects[0].challenges.is_empty());
        assert!(dataset.insights.is_empty());
    }

    #[test]
    fn rejects_percent_above_hundred() {
        let bytes = document(json!([project("a", 101, 0)]), json!([]));
        let err = ReportDataset::from_json(&bytes).unwrap_err();
        assert!(matches!(err, ReportError::PercentOutOfRange { value: 101, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let bytes = document(json!([project("a", 0, 0), project("a", 5, 5)]), json!([]));
        assert_eq!(
            ReportDataset::from_json(&bytes).unwrap_err(),
            ReportError::DuplicateProjectId("a".into())
        );
    }

    #[test]
    fn rejects_blank_ids() {
        let bytes = document(json!([project("  ", 0, 0)]), json!([]));
        assert_eq!(
            ReportDataset::from_json(&bytes).unwrap_err(),
            ReportError::EmptyProjectId(0)
        );
    }

    #[test]
    fn rejects_on_track_sprint() {
        let sprints = json!([
            { "name": "Sprint 0", "status": "on-track", "end_date": "2025-01-10", "phase": "Kick off" }
        ]);
        let bytes = document(json!([]), sprints);
        assert_eq!(
            ReportDataset::from_json(&bytes).unwrap_err(),
            ReportError::SprintOnTrack("Sprint 0".into())
        );
    }

    #[test]
    fn malformed_dates_fail_decode() {
        let sprints = json!([
            { "name": "Sprint 0", "status": "planned", "end_date": "Jul 28", "phase": "Kick off" }
        ]);
        let bytes = document(json!([]), sprints);
        assert!(matches!(
            ReportDataset::from_json(&bytes),
            Err(ReportError::Decode(_))
        ));
    }
}
