use dioxus::prelude::*;
use store::ContactStatus;

/// Active / Inactive radio group.
///
/// `name` groups the radios, so it must be unique per picker on the page.
#[component]
pub fn StatusPicker(
    name: String,
    value: ContactStatus,
    on_change: EventHandler<ContactStatus>,
) -> Element {
    rsx! {
        div {
            class: "status-picker",
            for status in ContactStatus::ALL {
                label {
                    key: "{status.value()}",
                    class: "status-option",
                    input {
                        r#type: "radio",
                        name: "{name}",
                        value: status.value(),
                        checked: value == status,
                        onchange: move |_| on_change.call(status),
                    }
                    span { "{status.label()}" }
                }
            }
        }
    }
}
