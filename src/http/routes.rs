use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::AppState;
use super::payload::{Fields, JsonBody};
use crate::domain::{Contact, ContactManager, ContactPatch, NewContact};
use crate::errors::AppError;

/// Runs a repository call off the async workers; the store does blocking file I/O.
async fn with_contacts<T, F>(state: AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(ContactManager) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let contacts = state.contacts;
    tokio::task::spawn_blocking(move || op(contacts)).await?
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = with_contacts(state, |contacts| Ok(contacts.list())).await?;
    Ok(Json(contacts))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let contact = with_contacts(state, move |contacts| contacts.get_by_id(&id)).await?;
    Ok(Json(contact))
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let new_contact = NewContact::from(Fields::from_body(body)?);
    let contact = with_contacts(state, move |contacts| contacts.create(new_contact)).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Contact>, AppError> {
    let patch = ContactPatch::from(Fields::from_body(body)?);
    let contact = with_contacts(state, move |contacts| contacts.update(&id, patch)).await?;
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let contact = with_contacts(state, move |contacts| contacts.delete(&id)).await?;
    Ok(Json(contact))
}
