pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::store::ContactStore;
use uuid::Uuid;

pub use contact::{Contact, ContactPatch, NewContact};
pub use manager::ContactManager;
