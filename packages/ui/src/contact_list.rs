use dioxus::prelude::*;
use store::{Contact, ContactDraft};

use crate::contacts::{use_contact_actions, use_contacts};
use crate::StatusPicker;
use crate::Icon;
use crate::icons::{FaPen, FaTrashCan};

/// Per-row edit state. A row is either showing its contact or holding an
/// unsaved draft of it; there is no third state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing(ContactDraft),
}

impl RowMode {
    /// Viewing → Editing, seeded with the contact's current fields.
    pub fn begin_edit(contact: &Contact) -> Self {
        RowMode::Editing(ContactDraft::from(contact))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowMode::Editing(_))
    }

    pub fn draft_mut(&mut self) -> Option<&mut ContactDraft> {
        match self {
            RowMode::Editing(draft) => Some(draft),
            RowMode::Viewing => None,
        }
    }

    /// Editing → Viewing, returning the edited record to store.
    /// Returns `None` (and stays put) when not editing.
    pub fn commit(&mut self, contact: &Contact) -> Option<Contact> {
        match std::mem::take(self) {
            RowMode::Editing(draft) => Some(contact.with_draft(draft)),
            RowMode::Viewing => None,
        }
    }

    /// Editing → Viewing, discarding the draft.
    pub fn cancel(&mut self) {
        *self = RowMode::Viewing;
    }
}

/// Every contact in insertion order.
#[component]
pub fn ContactList() -> Element {
    let contacts = use_contacts();
    let rows: Vec<Contact> = contacts.read().iter().cloned().collect();

    if rows.is_empty() {
        return rsx! {
            p { class: "contact-list-empty", "No contacts yet. Add one above." }
        };
    }

    rsx! {
        ul {
            class: "contact-list",
            for contact in rows {
                ContactRow { key: "{contact.id}", contact }
            }
        }
    }
}

#[component]
fn ContactRow(contact: Contact) -> Element {
    let actions = use_contact_actions();
    let mut mode = use_signal(RowMode::default);

    let body = match mode() {
        RowMode::Editing(draft) => {
            let current = contact.clone();
            rsx! {
                div {
                    class: "contact-fields",
                    input {
                        r#type: "text",
                        value: "{draft.name}",
                        oninput: move |evt: FormEvent| {
                            if let Some(d) = mode.write().draft_mut() {
                                d.name = evt.value();
                            }
                        },
                    }
                    input {
                        r#type: "email",
                        value: "{draft.email}",
                        oninput: move |evt: FormEvent| {
                            if let Some(d) = mode.write().draft_mut() {
                                d.email = evt.value();
                            }
                        },
                    }
                    input {
                        r#type: "tel",
                        value: "{draft.phone}",
                        oninput: move |evt: FormEvent| {
                            if let Some(d) = mode.write().draft_mut() {
                                d.phone = evt.value();
                            }
                        },
                    }
                    StatusPicker {
                        name: "edit-status-{contact.id}",
                        value: draft.status,
                        on_change: move |status| {
                            if let Some(d) = mode.write().draft_mut() {
                                d.status = status;
                            }
                        },
                    }
                }
                div {
                    class: "contact-actions",
                    button {
                        class: "button primary",
                        onclick: move |_| {
                            let updated = mode.write().commit(&current);
                            if let Some(updated) = updated {
                                actions.save(updated);
                            }
                        },
                        "Save"
                    }
                    button {
                        class: "button outline",
                        onclick: move |_| mode.write().cancel(),
                        "Cancel"
                    }
                }
            }
        }
        RowMode::Viewing => {
            let id = contact.id.clone();
            let toggle_id = contact.id.clone();
            let editable = contact.clone();
            rsx! {
                div {
                    class: "contact-fields",
                    div { class: "contact-name", "{contact.name}" }
                    div { class: "contact-email", "{contact.email}" }
                    div { class: "contact-phone", "{contact.phone}" }
                    StatusPicker {
                        name: "status-{contact.id}",
                        value: contact.status,
                        on_change: move |status| actions.set_status(&toggle_id, status),
                    }
                }
                div {
                    class: "contact-actions",
                    button {
                        class: "button destructive",
                        title: "Delete contact",
                        onclick: move |_| actions.remove(&id),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                    button {
                        class: "button primary",
                        title: "Edit contact",
                        onclick: move |_| mode.set(RowMode::begin_edit(&editable)),
                        Icon { icon: FaPen, width: 12, height: 12 }
                        " Edit"
                    }
                }
            }
        }
    };

    rsx! {
        li {
            class: if mode.read().is_editing() { "contact-row editing" } else { "contact-row" },
            {body}
        }
    }
}
