use super::*;
use serde::{Deserialize, Serialize};

/// A single record of the contact collection.
///
/// Field order here is the field order written to disk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    #[serde(default)]
    pub id: String,

    // Missing fields on disk load as empty strings so one odd record
    // does not cost the whole file.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Payload accepted when creating a contact.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct NewContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Payload accepted when updating a contact.
///
/// `None` means the field was omitted (or sent as `null`) and keeps the stored
/// value. `Some("")` is an explicit overwrite with an empty string.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ContactPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

pub const NAME_REQUIRED: &str = "name is required";

impl Contact {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
        }
    }

    /// Builds a fresh contact from a create payload, applying empty-string
    /// defaults to the optional fields.
    pub fn from_new(new_contact: NewContact) -> Result<Self, AppError> {
        let name = match new_contact.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::Validation(NAME_REQUIRED.to_string())),
        };

        Ok(Contact::new(
            name,
            new_contact.email.unwrap_or_default(),
            new_contact.phone.unwrap_or_default(),
        ))
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}
