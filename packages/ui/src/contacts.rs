//! Contact store access for the views.
//!
//! Views never touch the store signal directly for writes; they go through
//! [`ContactActions`], which applies the operation and records it in the
//! activity log. A `NotFound` from the store is logged and otherwise ignored,
//! leaving the collection as it was.

use dioxus::prelude::*;
use store::{Contact, ContactDraft, ContactId, ContactStatus, ContactStore, StoreError};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel, LogTopic};

/// Consume the `Signal<ContactStore>` from context.
pub fn use_contacts() -> Signal<ContactStore> {
    use_context::<Signal<ContactStore>>()
}

pub fn use_contact_actions() -> ContactActions {
    ContactActions {
        contacts: use_contacts(),
        log: use_activity_log(),
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ContactActions {
    contacts: Signal<ContactStore>,
    log: Signal<ActivityLog>,
}

impl ContactActions {
    pub fn add(self, draft: ContactDraft) -> ContactId {
        let mut contacts = self.contacts;
        let name = draft.name.clone();
        let id = contacts.write().add(draft);
        tracing::info!(%id, "contact added");
        self.record(LogLevel::Info, &format!("Added contact {}", display_name(&name)));
        id
    }

    pub fn save(self, contact: Contact) {
        let mut contacts = self.contacts;
        let name = contact.name.clone();
        let result = contacts.write().update(contact);
        self.report(result, &format!("Saved contact {}", display_name(&name)));
    }

    pub fn set_status(self, id: &ContactId, status: ContactStatus) {
        let mut contacts = self.contacts;
        let result = contacts.write().set_status(id, status);
        self.report(result, &format!("Marked contact {status}"));
    }

    pub fn remove(self, id: &ContactId) {
        let mut contacts = self.contacts;
        let result = contacts.write().remove(id);
        match result {
            Ok(contact) => {
                tracing::info!(%id, "contact removed");
                self.record(
                    LogLevel::Info,
                    &format!("Deleted contact {}", display_name(&contact.name)),
                );
            }
            Err(e) => self.ignore(e),
        }
    }

    fn report(self, result: Result<(), StoreError>, message: &str) {
        match result {
            Ok(()) => {
                tracing::info!("{message}");
                self.record(LogLevel::Info, message);
            }
            Err(e) => self.ignore(e),
        }
    }

    fn ignore(self, error: StoreError) {
        tracing::warn!("contact operation ignored: {error}");
        self.record(LogLevel::Warning, &format!("Ignored: {error}"));
    }

    fn record(self, level: LogLevel, message: &str) {
        let mut log = self.log;
        log_activity(&mut log, LogTopic::Contacts, level, message);
    }
}

pub(crate) fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Ana"), "Ana");
        assert_eq!(display_name("   "), "(unnamed)");
    }
}
