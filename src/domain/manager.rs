use super::*;
use std::sync::Arc;

/// Repository operations over the contact collection.
///
/// Every call loads the whole collection from the store, and every mutation
/// writes the whole collection back before returning. Nothing is cached
/// between calls and nothing serializes concurrent writers: two overlapping
/// load-mutate-save sequences race and the last save wins.
#[derive(Clone)]
pub struct ContactManager {
    storage: Arc<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Arc<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<Contact> {
        self.storage.load()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Contact, AppError> {
        self.storage
            .load()
            .into_iter()
            .find(|contact| contact.id == id)
            .ok_or_else(not_found)
    }

    pub fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load();
        let contact = Contact::from_new(new_contact)?;

        contacts.push(contact.clone());
        self.storage.save(&contacts)?;

        tracing::info!(id = %contact.id, "contact created");
        Ok(contact)
    }

    pub fn update(&self, id: &str, patch: ContactPatch) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load();
        let index = index_of(&contacts, id)?;

        contacts[index].apply(patch);
        self.storage.save(&contacts)?;

        tracing::info!(id = %id, "contact updated");
        Ok(contacts.swap_remove(index))
    }

    pub fn delete(&self, id: &str) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load();
        let index = index_of(&contacts, id)?;

        let removed = contacts.remove(index);
        self.storage.save(&contacts)?;

        tracing::info!(id = %id, "contact deleted");
        Ok(removed)
    }
}

fn index_of(contacts: &[Contact], id: &str) -> Result<usize, AppError> {
    contacts
        .iter()
        .position(|contact| contact.id == id)
        .ok_or_else(not_found)
}

fn not_found() -> AppError {
    AppError::NotFound("Contact".to_string())
}
