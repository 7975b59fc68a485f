use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::{
    dashboard::{DashboardView, ViewState},
    report::{self, ReportDataset},
    views::{
        CalculationMethodsModal, DashboardHeader, DataSources, DetailedView, ExecutiveSummary,
        SprintTimeline,
    },
};

#[cfg(debug_assertions)]
fn log_dashboard_render(state: &ViewState) {
    dioxus::logger::tracing::debug!(
        view = ?state.active_view(),
        methods_open = state.methods_open(),
        exporting = state.is_exporting(),
        "dashboard render"
    );
}

/// Root of the status dashboard. Owns the view state for the page session.
#[component]
pub fn Dashboard() -> Element {
    let mut view_state = use_signal(ViewState::default);

    let report = match report::builtin() {
        Ok(report) => report,
        Err(err) => {
            error!(%err, "status report unavailable");
            return rsx! {
                main { class: "dashboard dashboard--empty",
                    section { class: "dashboard-card",
                        h2 { class: "dashboard-card__title", "Report unavailable" }
                        p { class: "dashboard-card__placeholder", "Couldn't load the status report: {err}" }
                    }
                }
            };
        }
    };

    let state = view_state();

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(&state);
    }

    let main_view = render_view(state.active_view(), report, view_state);

    rsx! {
        div { class: "dashboard",
            DashboardHeader { header: report.header.clone(), view_state }

            main { class: "dashboard__layout",
                div { class: "dashboard__main", {main_view} }

                aside { class: "dashboard__sidebar",
                    SprintTimeline { sprints: report.sprints.clone() }
                    if !report.data_sources.is_empty() {
                        DataSources { sources: report.data_sources.clone() }
                    }
                }
            }

            if state.methods_open() {
                CalculationMethodsModal {
                    methods: report.calculation_methods.clone(),
                    on_close: move |_| view_state.write().close_calculation_methods(),
                }
            }
        }
    }
}

fn render_view(
    view: DashboardView,
    report: &ReportDataset,
    view_state: Signal<ViewState>,
) -> Element {
    match view {
        DashboardView::Executive => rsx! {
            ExecutiveSummary {
                projects: report.projects.clone(),
                insights: report.insights.clone(),
                metrics: report.derived_metrics(),
            }
        },
        DashboardView::Detailed => rsx! {
            DetailedView { projects: report.projects.clone(), view_state }
        },
    }
}
