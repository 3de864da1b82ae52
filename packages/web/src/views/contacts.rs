use dioxus::prelude::*;

use ui::views::ContactsView;

#[component]
pub fn Contacts() -> Element {
    rsx! {
        ContactsView {}
    }
}
