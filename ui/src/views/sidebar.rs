use dioxus::prelude::*;

use crate::{
    core::format::format_date_badge,
    report::{DataSource, SprintRecord},
};

#[component]
pub fn SprintTimeline(sprints: Vec<SprintRecord>) -> Element {
    rsx! {
        section { class: "dashboard-card timeline",
            div { class: "dashboard-card__header",
                h3 { class: "dashboard-card__title", "Sprint Timeline" }
            }

            if sprints.is_empty() {
                p { class: "dashboard-card__placeholder", "No sprints scheduled." }
            } else {
                ol { class: "timeline__items",
                    for sprint in sprints.iter() {
                        li { key: "{sprint.name}", class: "timeline__item",
                            span { class: sprint.status.timeline_dot_class() }
                            div { class: "timeline__body",
                                div { class: "timeline__row",
                                    span { class: "timeline__name", "{sprint.name}" }
                                    span { class: "timeline__date", "{format_date_badge(sprint.end_date)}" }
                                }
                                div { class: "timeline__row",
                                    span { class: sprint.status.badge_class(), "{sprint.status.label()}" }
                                    span { class: "timeline__phase", "{sprint.phase}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataSources(sources: Vec<DataSource>) -> Element {
    rsx! {
        section { class: "dashboard-card data-sources",
            div { class: "dashboard-card__header",
                h3 { class: "dashboard-card__title", "Data Sources" }
            }
            dl { class: "data-sources__items",
                for source in sources.iter() {
                    div { key: "{source.label}", class: "data-sources__item",
                        dt { "{source.label}:" }
                        dd { "{source.value}" }
                    }
                }
            }
        }
    }
}
