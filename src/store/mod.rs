pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStore;
pub use memory::MemStore;

/// Whole-collection persistence.
///
/// `load` never fails: a store that cannot produce its collection (missing,
/// unreadable or malformed backing data) reports an empty one. `save` replaces
/// the entire collection and surfaces any failure to the caller.
pub trait ContactStore: Send + Sync {
    fn load(&self) -> Vec<Contact>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
