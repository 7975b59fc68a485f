use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::{
    core::format::format_long_date,
    dashboard::{run_export, DashboardView, HostPrint, ViewState, EXPORT_SETTLE_MS},
    report::ReportHeader,
};

#[component]
pub fn DashboardHeader(header: ReportHeader, view_state: Signal<ViewState>) -> Element {
    let mut view_state = view_state;
    let state = view_state();
    let subtitle = format!(
        "{} Status Report • {}",
        header.week_label,
        format_long_date(header.report_date)
    );

    let on_export = move |_: MouseEvent| {
        spawn(async move {
            let host = HostPrint;
            let outcome = run_export(view_state, &host, EXPORT_SETTLE_MS).await;
            debug!(?outcome, "export button handled");
        });
    };

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header__inner",
                div { class: "dashboard-header__titles",
                    h1 { class: "dashboard-header__title", "{header.title}" }
                    p { class: "dashboard-header__subtitle", "{subtitle}" }
                }

                div { class: "dashboard-header__actions",
                    for view in DashboardView::ALL {
                        button {
                            key: "{view.label()}",
                            r#type: "button",
                            class: toggle_class(state.active_view() == view),
                            onclick: move |_| view_state.write().select_view(view),
                            "{view.label()}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| view_state.write().open_calculation_methods(),
                        "Calculation Methods"
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: state.is_exporting(),
                        onclick: on_export,
                        if state.is_exporting() {
                            span { class: "spinner", aria_hidden: "true" }
                            "Exporting..."
                        } else {
                            "Export PDF"
                        }
                    }
                }
            }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "button button--toggle button--active"
    } else {
        "button button--toggle"
    }
}
