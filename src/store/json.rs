use super::*;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const STORAGE_PATH: &str = "contacts.json";

pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<Vec<Contact>, AppError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Vec<Contact> {
        // Read failures are indistinguishable from an empty book.
        self.try_load().unwrap_or_default()
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_contacts.as_bytes())?;

        Ok(())
    }
}
