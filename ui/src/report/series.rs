//! Rows for the grouped savings bar chart.

use super::ProjectRecord;

/// One chart group: a project with its two savings bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsRow {
    pub name: String,
    pub automation: u8,
    pub manual: u8,
}

pub fn savings_series(projects: &[ProjectRecord]) -> Vec<SavingsRow> {
    projects
        .iter()
        .map(|project| SavingsRow {
            name: chart_label(&project.name),
            automation: project.auto_savings,
            manual: project.manual_savings,
        })
        .collect()
}

/// Short axis label: drops the `PEGA` platform prefix and collapses runs of
/// whitespace. `"PEGA E&S"` becomes `"E&S"`.
pub fn chart_label(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .filter(|(idx, word)| !(**word == "PEGA" && *idx < last))
        .map(|(_, word)| *word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper bound of the value axis: the largest bar rounded up to the next
/// multiple of 20 (so quarter gridlines land on whole percents), capped at 100.
pub fn axis_ceiling(rows: &[SavingsRow]) -> u8 {
    let peak = rows
        .iter()
        .map(|row| row.automation.max(row.manual))
        .max()
        .unwrap_or(0);
    let rounded = (u16::from(peak) + 19) / 20 * 20;
    rounded.clamp(20, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{fixtures::project, Status};

    #[test]
    fn labels_drop_platform_prefix() {
        assert_eq!(chart_label("PEGA Referral"), "Referral");
        assert_eq!(chart_label("PEGA  E&S"), "E&S");
        assert_eq!(chart_label("GWPC R15 DM"), "GWPC R15 DM");
        assert_eq!(chart_label("Finance   IT ReMod "), "Finance IT ReMod");
    }

    #[test]
    fn bare_prefix_is_kept() {
        assert_eq!(chart_label("PEGA"), "PEGA");
    }

    #[test]
    fn series_preserves_dataset_order() {
        let mut first = project("a", Status::OnTrack, 20, 0);
        first.name = "PEGA MyBook".into();
        let second = project("b", Status::Planned, 0, 20);
        let rows = savings_series(&[first, second]);
        assert_eq!(
            rows,
            vec![
                SavingsRow { name: "MyBook".into(), automation: 20, manual: 0 },
                SavingsRow { name: "b".into(), automation: 0, manual: 20 },
            ]
        );
    }

    #[test]
    fn ceiling_rounds_to_twenty() {
        let row = |automation, manual| SavingsRow { name: String::new(), automation, manual };
        assert_eq!(axis_ceiling(&[]), 20);
        assert_eq!(axis_ceiling(&[row(0, 0)]), 20);
        assert_eq!(axis_ceiling(&[row(25, 20)]), 40);
        assert_eq!(axis_ceiling(&[row(40, 0)]), 40);
        assert_eq!(axis_ceiling(&[row(100, 99)]), 100);
    }
}
