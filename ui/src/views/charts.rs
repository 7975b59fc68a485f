use dioxus::prelude::*;

use crate::report::{axis_ceiling, SavingsRow};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 36.0;
const MARGIN_LEFT: f64 = 44.0;

#[component]
pub fn SavingsChart(rows: Vec<SavingsRow>) -> Element {
    let layout = ChartLayout::new(&rows);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");

    rsx! {
        section { class: "dashboard-card savings-chart",
            div { class: "dashboard-card__header",
                div {
                    h3 { class: "dashboard-card__title", "Productivity Impact Analysis" }
                    p { class: "dashboard-card__meta", "Automation and manual task savings by project" }
                }
                div { class: "savings-chart__legend",
                    span { class: "savings-chart__legend-item",
                        span { class: "savings-chart__swatch savings-chart__swatch--automation" }
                        "Automation"
                    }
                    span { class: "savings-chart__legend-item",
                        span { class: "savings-chart__swatch savings-chart__swatch--manual" }
                        "Manual"
                    }
                }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder", "No projects to chart." }
            } else {
                svg {
                    class: "savings-chart__svg",
                    view_box: "{view_box}",
                    "role": "img",
                    "aria-label": "Grouped bar chart of automation and manual savings per project",

                    for tick in layout.ticks.iter() {
                        line {
                            class: "savings-chart__grid",
                            x1: "{MARGIN_LEFT}",
                            y1: "{tick.y}",
                            x2: "{layout.plot_right}",
                            y2: "{tick.y}",
                        }
                        text {
                            class: "savings-chart__tick",
                            x: "{layout.tick_label_x}",
                            y: "{tick.label_y}",
                            text_anchor: "end",
                            "{tick.value}"
                        }
                    }

                    for group in layout.groups.iter() {
                        g { class: "savings-chart__group",
                            rect {
                                class: "savings-chart__bar savings-chart__bar--automation",
                                x: "{group.automation.x}",
                                y: "{group.automation.y}",
                                width: "{group.automation.width}",
                                height: "{group.automation.height}",
                                rx: "2",
                            }
                            rect {
                                class: "savings-chart__bar savings-chart__bar--manual",
                                x: "{group.manual.x}",
                                y: "{group.manual.y}",
                                width: "{group.manual.width}",
                                height: "{group.manual.height}",
                                rx: "2",
                            }
                            text {
                                class: "savings-chart__label",
                                x: "{group.label_x}",
                                y: "{layout.label_y}",
                                text_anchor: "middle",
                                "{group.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct BarGroup {
    label: String,
    label_x: f64,
    automation: Bar,
    manual: Bar,
}

#[derive(Debug, Clone, PartialEq)]
struct Tick {
    value: u8,
    y: f64,
    label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct ChartLayout {
    groups: Vec<BarGroup>,
    ticks: Vec<Tick>,
    plot_right: f64,
    tick_label_x: f64,
    label_y: f64,
}

impl ChartLayout {
    fn new(rows: &[SavingsRow]) -> Self {
        let ceiling = f64::from(axis_ceiling(rows));
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;

        let ticks = (0..=4u8)
            .map(|step| {
                let value = ceiling * f64::from(step) / 4.0;
                let y = baseline - plot_height * f64::from(step) / 4.0;
                Tick {
                    value: value as u8,
                    y,
                    label_y: y + 4.0,
                }
            })
            .collect();

        let slot = plot_width / rows.len().max(1) as f64;
        let bar_width = slot * 0.3;
        let bar = |x: f64, value: u8| {
            let height = plot_height * f64::from(value) / ceiling;
            Bar {
                x,
                y: baseline - height,
                width: bar_width,
                height,
            }
        };

        let groups = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let left = MARGIN_LEFT + slot * idx as f64;
                BarGroup {
                    label: row.name.clone(),
                    label_x: left + slot / 2.0,
                    automation: bar(left + slot * 0.2, row.automation),
                    manual: bar(left + slot * 0.5, row.manual),
                }
            })
            .collect();

        Self {
            groups,
            ticks,
            plot_right: WIDTH - MARGIN_RIGHT,
            tick_label_x: MARGIN_LEFT - 8.0,
            label_y: baseline + 20.0,
        }
    }
}
