use dioxus::prelude::*;

use ui::views::ChartsView;

#[component]
pub fn Charts() -> Element {
    rsx! {
        ChartsView {}
    }
}
