use dioxus::prelude::*;

use crate::{
    core::format::{format_percent, format_ratio},
    report::{savings_series, DerivedMetrics, Insight, InsightTone, ProjectRecord},
    views::SavingsChart,
};

#[component]
pub fn ExecutiveSummary(
    projects: Vec<ProjectRecord>,
    insights: Vec<Insight>,
    metrics: DerivedMetrics,
) -> Element {
    let rows = savings_series(&projects);

    let health_note = if metrics.all_on_track() {
        "All on track".to_string()
    } else {
        let behind = metrics.total_projects - metrics.on_track;
        format!("{behind} need attention")
    };
    let sprint_note = format!("{} active", metrics.current_sprint_label());

    rsx! {
        div { class: "executive",
            div { class: "metric-cards",
                {metric_card("Project Health", format_ratio(metrics.on_track, metrics.total_projects), rsx! {
                    span { class: "metric-card__note metric-card__note--positive",
                        span { class: "metric-card__dot metric-card__dot--positive" }
                        "{health_note}"
                    }
                })}
                {metric_card("Automation", format_percent(metrics.avg_automation), rsx! {
                    span { class: "metric-card__note", "Average savings" }
                })}
                {metric_card("Manual Tasks", format_percent(metrics.avg_manual), rsx! {
                    span { class: "metric-card__note", "Average savings" }
                })}
                {metric_card("Sprint Progress", metrics.completed_sprints.to_string(), rsx! {
                    span { class: "metric-card__note metric-card__note--active",
                        span { class: "metric-card__dot metric-card__dot--active" }
                        "{sprint_note}"
                    }
                })}
            }

            SavingsChart { rows }

            section { class: "dashboard-card project-grid",
                div { class: "dashboard-card__header",
                    div {
                        h3 { class: "dashboard-card__title", "Project Status Overview" }
                        p { class: "dashboard-card__meta", "Current progress and key metrics for each initiative" }
                    }
                }
                if projects.is_empty() {
                    p { class: "dashboard-card__placeholder", "No projects in this report." }
                } else {
                    div { class: "project-grid__items",
                        for project in projects.iter() {
                            {project_card(project)}
                        }
                    }
                }
            }

            if !insights.is_empty() {
                div { class: "insights",
                    for insight in insights.iter() {
                        div {
                            key: "{insight.title}",
                            class: insight_class(insight.tone),
                            h4 { class: "insight__title", "{insight.title}" }
                            p { class: "insight__body", "{insight.body}" }
                        }
                    }
                }
            }
        }
    }
}

fn metric_card(label: &str, value: String, note: Element) -> Element {
    rsx! {
        div { class: "metric-card",
            p { class: "metric-card__label", "{label}" }
            p { class: "metric-card__value", "{value}" }
            {note}
        }
    }
}

fn project_card(project: &ProjectRecord) -> Element {
    rsx! {
        article { key: "{project.id}", class: "project-card",
            div { class: "project-card__heading",
                h4 { class: "project-card__name", "{project.name}" }
                span { class: project.status.badge_class(), "{project.status.label()}" }
            }
            p { class: "project-card__coverage", "{project.coverage}" }
            div { class: "project-card__figures",
                div { class: "project-card__figure",
                    span { class: "project-card__figure-value", "{format_percent(project.auto_savings)}" }
                    span { class: "project-card__figure-label", "Auto" }
                }
                div { class: "project-card__figure",
                    span { class: "project-card__figure-value", "{format_percent(project.manual_savings)}" }
                    span { class: "project-card__figure-label", "Manual" }
                }
            }
            div { class: "project-card__footer",
                span { "Lead: {project.lead}" }
                span { "Next: {project.next_milestone}" }
            }
        }
    }
}

fn insight_class(tone: InsightTone) -> &'static str {
    match tone {
        InsightTone::Positive => "insight insight--positive",
        InsightTone::Info => "insight insight--info",
        InsightTone::Caution => "insight insight--caution",
    }
}
