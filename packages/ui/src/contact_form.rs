use dioxus::prelude::*;
use store::ContactDraft;

use crate::StatusPicker;

/// Form for adding a contact. Submits the draft as typed and resets itself.
#[component]
pub fn ContactForm(on_submit: EventHandler<ContactDraft>) -> Element {
    let mut draft = use_signal(ContactDraft::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft());
        draft.set(ContactDraft::default());
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: handle_submit,
            input {
                r#type: "text",
                placeholder: "Name",
                value: "{draft.read().name}",
                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
            }
            input {
                r#type: "email",
                placeholder: "Email",
                value: "{draft.read().email}",
                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
            }
            input {
                r#type: "tel",
                placeholder: "Phone",
                value: "{draft.read().phone}",
                oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
            }
            StatusPicker {
                name: "new-contact-status",
                value: draft.read().status,
                on_change: move |status| draft.write().status = status,
            }
            button {
                class: "button primary",
                r#type: "submit",
                "Add Contact"
            }
        }
    }
}
