use dioxus::prelude::*;

use ui::views::MapsView;

#[component]
pub fn Maps() -> Element {
    rsx! {
        MapsView {}
    }
}
