use dioxus::prelude::*;

use crate::{core::format::format_percent, dashboard::ViewState, report::ProjectRecord};

#[component]
pub fn DetailedView(projects: Vec<ProjectRecord>, view_state: Signal<ViewState>) -> Element {
    let state = view_state();

    rsx! {
        div { class: "detailed",
            for project in projects.into_iter() {
                {project_panel(state.is_expanded(&project.id), project, view_state)}
            }
        }
    }
}

fn project_panel(
    expanded: bool,
    project: ProjectRecord,
    mut view_state: Signal<ViewState>,
) -> Element {
    let toggle_id = project.id.clone();
    let panel_class = if expanded {
        "project-panel project-panel--expanded"
    } else {
        "project-panel"
    };

    rsx! {
        section { key: "{project.id}", class: panel_class,
            button {
                r#type: "button",
                class: "project-panel__header",
                aria_expanded: "{expanded}",
                onclick: move |_| view_state.write().toggle_project_section(&toggle_id),

                span { class: "project-panel__heading",
                    span { class: "project-panel__chevron", aria_hidden: "true",
                        if expanded { "▾" } else { "▸" }
                    }
                    span { class: "project-panel__name", "{project.name}" }
                    span { class: project.status.badge_class(), "{project.status.label()}" }
                }
                span { class: "project-panel__figures",
                    span { "Auto: {format_percent(project.auto_savings)}" }
                    span { "Manual: {format_percent(project.manual_savings)}" }
                }
            }

            if expanded {
                {panel_body(&project)}
            }
        }
    }
}

fn panel_body(project: &ProjectRecord) -> Element {
    rsx! {
        div { class: "project-panel__body",
            div { class: "project-panel__column",
                div { class: "project-panel__block",
                    h4 { "Project Description" }
                    p { "{project.description}" }
                }
                div { class: "project-panel__block",
                    h4 { "Current Coverage" }
                    p { "{project.coverage}" }
                }
                div { class: "project-panel__block",
                    h4 { "Key Achievements" }
                    ul { class: "bullet-list bullet-list--positive",
                        for achievement in project.key_achievements.iter() {
                            li { "{achievement}" }
                        }
                    }
                }
            }

            div { class: "project-panel__column",
                div { class: "project-panel__block",
                    h4 { "Performance Metrics" }
                    dl { class: "project-panel__metrics",
                        div { class: "project-panel__metric",
                            dt { "Automation Savings" }
                            dd { "{format_percent(project.auto_savings)}" }
                        }
                        div { class: "project-panel__metric",
                            dt { "Manual Task Savings" }
                            dd { "{format_percent(project.manual_savings)}" }
                        }
                    }
                }
                div { class: "project-panel__block",
                    h4 { "Sprint Focus" }
                    p { "{project.sprint_focus}" }
                }
                if !project.challenges.is_empty() {
                    div { class: "project-panel__block",
                        h4 { "Challenges" }
                        ul { class: "bullet-list bullet-list--caution",
                            for challenge in project.challenges.iter() {
                                li { "{challenge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
