use dioxus::prelude::*;
use store::ContactStatus;

use crate::{use_contact_actions, use_contacts, ContactForm, ContactList};

const CONTACTS_CSS: Asset = asset!("/assets/styling/contacts.css");

/// Contact manager: add form on top, the list below.
#[component]
pub fn ContactsView() -> Element {
    let contacts = use_contacts();
    let actions = use_contact_actions();

    let total = contacts.read().len();
    let active = contacts.read().count_by_status(ContactStatus::Active);
    let inactive = contacts.read().count_by_status(ContactStatus::Inactive);

    rsx! {
        document::Stylesheet { href: CONTACTS_CSS }
        div {
            class: "view contacts-view",
            h1 { class: "view-title", "Contacts" }
            p {
                class: "contacts-summary",
                "{total} total · {active} active · {inactive} inactive"
            }
            ContactForm {
                on_submit: move |draft| {
                    actions.add(draft);
                },
            }
            ContactList {}
        }
    }
}
