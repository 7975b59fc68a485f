use dioxus::prelude::*;

use crate::report::CalculationMethod;

/// Reference sheet explaining how each savings figure is measured.
#[component]
pub fn CalculationMethodsModal(methods: Vec<CalculationMethod>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "methods-title",

                div { class: "modal__header",
                    h2 { id: "methods-title", class: "modal__title", "Calculation Methodologies" }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal__body",
                    for method in methods.iter() {
                        {method_block(method)}
                    }
                }
            }
        }
    }
}

fn method_block(method: &CalculationMethod) -> Element {
    rsx! {
        article { key: "{method.key}", class: "method",
            h3 { class: "method__title", "{method.title}" }
            p { class: "method__description", "{method.description}" }

            div { class: "method__formula",
                span { class: "method__formula-label", "Formula:" }
                code { "{method.formula}" }
            }

            div { class: "method__columns",
                div {
                    h4 { "Data Points Used:" }
                    ul { class: "bullet-list",
                        for point in method.data_points.iter() {
                            li { "{point}" }
                        }
                    }
                }
                div {
                    h4 { "Example:" }
                    p { class: "method__example", "{method.example}" }
                    div { class: "method__notes",
                        div { strong { "Measurement Period: " } "{method.measurement_period}" }
                        div { strong { "Accuracy: " } "{method.accuracy}" }
                    }
                }
            }
        }
    }
}
