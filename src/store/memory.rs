use super::*;
use std::sync::{Mutex, PoisonError};

/// Keeps the collection in process memory. Stands in for the JSON file in tests.
#[derive(Default)]
pub struct MemStore {
    data: Mutex<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Mutex::new(contacts),
        }
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Vec<Contact> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = contacts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_contacts_are_loaded_back() -> Result<(), AppError> {
        let store = MemStore::new();
        assert!(store.load().is_empty());

        let contact = Contact::new("Diane".to_string(), "".to_string(), "".to_string());
        store.save(std::slice::from_ref(&contact))?;

        assert_eq!(store.load(), vec![contact]);
        Ok(())
    }
}
