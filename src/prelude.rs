pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactPatch, NewContact},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::http::{AppState, build_router};
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
