use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Same inlined theme as the desktop shell, so print output matches across targets.
        document::Style { "{ui::THEME_CSS}" }
        document::Title { "Statusdeck" }

        ui::Dashboard {}
    }
}
