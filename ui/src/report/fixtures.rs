//! Hand-built records for unit tests.

use time::macros::date;

use super::{ProjectRecord, SprintRecord, Status};

pub(crate) fn project(id: &str, status: Status, auto: u8, manual: u8) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: id.to_string(),
        status,
        auto_savings: auto,
        manual_savings: manual,
        coverage: String::new(),
        lead: "Team Lead".to_string(),
        next_milestone: String::new(),
        description: String::new(),
        key_achievements: Vec::new(),
        challenges: Vec::new(),
        sprint_focus: String::new(),
    }
}

pub(crate) fn sprint(name: &str, status: Status) -> SprintRecord {
    SprintRecord {
        name: name.to_string(),
        status,
        end_date: date!(2025 - 09 - 19),
        phase: "Execution".to_string(),
    }
}
