//! # ContactStore: the ordered, in-memory contact collection
//!
//! [`ContactStore`] is the only stateful component of the dashboard. It keeps
//! contacts in insertion order (which is also display order) and exposes the
//! operations the views need:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`add`](ContactStore::add) | Appends a new contact with a freshly generated [`ContactId`] and returns it. Never fails. |
//! | [`update`](ContactStore::update) | Replaces the mutable fields of the record with the same id, in place. |
//! | [`remove`](ContactStore::remove) | Deletes the record with the given id and returns it. |
//! | [`set_status`](ContactStore::set_status) | Quick toggle; goes through [`update`](ContactStore::update) so it ends in the same state as an edit-and-save. |
//!
//! `update`, `remove` and `set_status` return [`StoreError::NotFound`] for an
//! unknown id and leave the collection untouched. Callers decide whether that
//! matters; the views log it and move on.

use crate::models::{Contact, ContactDraft, ContactId, ContactStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no contact with id {0}")]
    NotFound(ContactId),
}

/// Ordered collection of contacts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contact from `draft` under a fresh id and append it.
    pub fn add(&mut self, draft: ContactDraft) -> ContactId {
        let id = self.fresh_id();
        self.contacts.push(Contact::from_draft(id.clone(), draft));
        id
    }

    /// Replace the stored record whose id matches `contact.id`.
    pub fn update(&mut self, contact: Contact) -> Result<(), StoreError> {
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| StoreError::NotFound(contact.id.clone()))?;
        *slot = contact;
        Ok(())
    }

    pub fn remove(&mut self, id: &ContactId) -> Result<Contact, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(self.contacts.remove(index))
    }

    /// Change only the status of a contact.
    pub fn set_status(&mut self, id: &ContactId, status: ContactStatus) -> Result<(), StoreError> {
        let mut contact = self
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        contact.status = status;
        self.update(contact)
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.position(id).is_some()
    }

    /// Contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn count_by_status(&self, status: ContactStatus) -> usize {
        self.contacts.iter().filter(|c| c.status == status).count()
    }

    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    // Ids are unique within a store.
    fn fresh_id(&self) -> ContactId {
        loop {
            let id = ContactId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> ContactDraft {
        ContactDraft::new("Ana", "ana@x.com", "555", ContactStatus::Active)
    }

    #[test]
    fn test_add_and_get() {
        let mut store = ContactStore::new();
        assert!(store.is_empty());

        let id = store.add(ana());

        assert_eq!(store.len(), 1);
        let contact = store.get(&id).unwrap();
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.email, "ana@x.com");
        assert_eq!(contact.phone, "555");
        assert_eq!(contact.status, ContactStatus::Active);
    }

    #[test]
    fn test_add_accepts_empty_fields() {
        let mut store = ContactStore::new();
        let id = store.add(ContactDraft::default());
        let contact = store.get(&id).unwrap();
        assert_eq!(contact.name, "");
        assert_eq!(contact.status, ContactStatus::Active);
    }

    #[test]
    fn test_add_generates_unique_ids_in_insertion_order() {
        let mut store = ContactStore::new();
        let first = store.add(ContactDraft::new("A", "", "", ContactStatus::Active));
        let second = store.add(ContactDraft::new("B", "", "", ContactStatus::Inactive));
        let third = store.add(ContactDraft::new("C", "", "", ContactStatus::Active));

        assert_ne!(first, second);
        assert_ne!(second, third);
        let names: Vec<&str> = store.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut store = ContactStore::new();
        let keep = store.add(ContactDraft::new("Keep", "", "", ContactStatus::Active));
        let drop = store.add(ContactDraft::new("Drop", "", "", ContactStatus::Active));

        let removed = store.remove(&drop).unwrap();
        assert_eq!(removed.name, "Drop");
        assert_eq!(store.len(), 1);
        assert!(store.get(&drop).is_none());
        assert!(store.contains(&keep));

        let before = store.clone();
        let missing = ContactId::from("missing");
        assert_eq!(store.remove(&missing), Err(StoreError::NotFound(missing)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut store = ContactStore::new();
        let first = store.add(ana());
        store.add(ContactDraft::new("Bo", "", "", ContactStatus::Active));

        let edited = store.get(&first).unwrap().with_draft(ContactDraft::new(
            "Ana Maria",
            "am@x.com",
            "777",
            ContactStatus::Inactive,
        ));
        store.update(edited).unwrap();

        let contact = &store.as_slice()[0];
        assert_eq!(contact.id, first);
        assert_eq!(contact.name, "Ana Maria");
        assert_eq!(contact.email, "am@x.com");
        assert_eq!(contact.phone, "777");
        assert_eq!(contact.status, ContactStatus::Inactive);
        assert_eq!(store.as_slice()[1].name, "Bo");
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let mut store = ContactStore::new();
        store.add(ana());
        let before = store.clone();

        let stranger = Contact::from_draft(ContactId::from("nope"), ContactDraft::default());
        let result = store.update(stranger);

        assert_eq!(result, Err(StoreError::NotFound(ContactId::from("nope"))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_quick_toggle_matches_edit_flow() {
        let mut quick = ContactStore::new();
        let id = quick.add(ana());
        let mut edited = quick.clone();

        quick.set_status(&id, ContactStatus::Inactive).unwrap();

        let mut draft = ContactDraft::from(edited.get(&id).unwrap());
        draft.status = draft.status.toggled();
        let contact = edited.get(&id).unwrap().with_draft(draft);
        edited.update(contact).unwrap();

        assert_eq!(quick, edited);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let mut store = ContactStore::new();
        let missing = ContactId::from("missing");
        assert!(store.set_status(&missing, ContactStatus::Inactive).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_count_by_status() {
        let mut store = ContactStore::new();
        store.add(ContactDraft::new("A", "", "", ContactStatus::Active));
        store.add(ContactDraft::new("B", "", "", ContactStatus::Inactive));
        store.add(ContactDraft::new("C", "", "", ContactStatus::Active));

        assert_eq!(store.count_by_status(ContactStatus::Active), 2);
        assert_eq!(store.count_by_status(ContactStatus::Inactive), 1);
    }

    #[test]
    fn test_contact_lifecycle() {
        let mut store = ContactStore::new();
        assert!(store.is_empty());

        let id = store.add(ana());
        assert_eq!(store.len(), 1);

        store.set_status(&id, ContactStatus::Inactive).unwrap();
        assert_eq!(store.as_slice()[0].status, ContactStatus::Inactive);

        store.remove(&id).unwrap();
        assert!(store.is_empty());
    }
}
