//! Static report content: the records the dashboard renders and the pure
//! aggregations derived from them.
//!
//! Everything here is immutable once loaded. The dataset ships inside the
//! binary (see [`dataset`]) and is decoded once per process through
//! [`builtin`].

mod dataset;
pub use dataset::ReportError;

mod metrics;
pub use metrics::{DerivedMetrics, NO_CURRENT_SPRINT};

mod series;
pub use series::{axis_ceiling, chart_label, savings_series, SavingsRow};

mod status;
pub use status::Status;

#[cfg(test)]
pub(crate) mod fixtures;

use once_cell::sync::Lazy;
use serde::Deserialize;
use time::Date;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportHeader {
    pub title: String,
    pub week_label: String,
    #[serde(with = "dataset::iso_date")]
    pub report_date: Date,
    pub overall_status: Status,
    #[serde(with = "dataset::iso_date")]
    pub report_out_date: Date,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub status: Status,
    /// Percent, 0–100.
    pub auto_savings: u8,
    /// Percent, 0–100.
    pub manual_savings: u8,
    pub coverage: String,
    pub lead: String,
    pub next_milestone: String,
    pub description: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    pub sprint_focus: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SprintRecord {
    pub name: String,
    pub status: Status,
    #[serde(with = "dataset::iso_date")]
    pub end_date: Date,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationMethod {
    pub key: String,
    pub title: String,
    pub description: String,
    pub formula: String,
    pub data_points: Vec<String>,
    pub example: String,
    pub measurement_period: String,
    pub accuracy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightTone {
    Positive,
    Info,
    Caution,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insight {
    pub tone: InsightTone,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSource {
    pub label: String,
    pub value: String,
}

/// The whole report as shipped. Ordering of every list is display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportDataset {
    pub header: ReportHeader,
    pub projects: Vec<ProjectRecord>,
    pub sprints: Vec<SprintRecord>,
    pub calculation_methods: Vec<CalculationMethod>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
}

impl ReportDataset {
    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn calculation_method(&self, key: &str) -> Option<&CalculationMethod> {
        self.calculation_methods
            .iter()
            .find(|method| method.key == key)
    }

    /// Recomputed on every call; nothing is cached alongside the dataset.
    pub fn derived_metrics(&self) -> DerivedMetrics {
        DerivedMetrics::derive(&self.projects, &self.sprints)
    }
}

static BUILTIN: Lazy<Result<ReportDataset, ReportError>> = Lazy::new(ReportDataset::load_embedded);

/// The report compiled into this build, decoded and validated once per process.
pub fn builtin() -> Result<&'static ReportDataset, ReportError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}
