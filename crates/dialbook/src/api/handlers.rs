//! HTTP request handlers for contact CRUD and search.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use dialbook_core::{Contact, ContactDraft, ContactId, validate_draft};
use serde::Deserialize;

use super::AppState;
use super::error::ApiError;

/// Body of a create request. The server assigns the ID.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateContact {
    name: String,
    #[serde(default)]
    phone: String,
}

/// Body of an update request. The ID must match the path.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateContact {
    id: i64,
    name: String,
    #[serde(default)]
    phone: String,
}

/// Query parameters for name search.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    name: Option<String>,
}

/// `GET /api/contacts` — every contact in the phonebook.
pub(crate) async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contacts.list().await?))
}

/// `GET /api/contacts/{id}` — a single contact, 404 if absent.
pub(crate) async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state
        .contacts
        .get(ContactId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(contact))
}

/// `POST /api/contacts` — create a contact.
///
/// 400 for a blank name, 409 when the name is already taken
/// (case-insensitive), otherwise 201 with a Location header.
pub(crate) async fn create_contact(
    State(state): State<AppState>,
    Json(body): Json<CreateContact>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = ContactDraft::new(body.name, body.phone);
    validate_draft(&draft).map_err(|e| ApiError::Validation(e.to_string()))?;

    if state.contacts.get_by_name(&draft.name).await?.is_some() {
        return Err(ApiError::Conflict(format!(
            "a contact named {:?} already exists",
            draft.name
        )));
    }

    let contact = state.contacts.create(&draft).await?;
    let location = format!("/api/contacts/{}", contact.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(contact),
    ))
}

/// `PUT /api/contacts/{id}` — overwrite name and phone of a contact.
///
/// 400 on path/body ID mismatch or blank name, 404 when the target does not
/// exist, 409 when the new name belongs to a different contact. Renaming a
/// contact to its own current name is not a conflict.
pub(crate) async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateContact>,
) -> Result<Json<Contact>, ApiError> {
    if body.id != id {
        return Err(ApiError::Validation(
            "path and body ids do not match".to_string(),
        ));
    }

    let draft = ContactDraft::new(body.name, body.phone);
    validate_draft(&draft).map_err(|e| ApiError::Validation(e.to_string()))?;

    let target = ContactId::new(id);
    if state.contacts.get(target).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    if let Some(other) = state.contacts.get_by_name(&draft.name).await? {
        if other.id != target {
            return Err(ApiError::Conflict(format!(
                "a contact named {:?} already exists",
                draft.name
            )));
        }
    }

    let updated = Contact {
        id: target,
        name: draft.name,
        phone: draft.phone,
    };
    state.contacts.update(&updated).await?;

    Ok(Json(updated))
}

/// `DELETE /api/contacts/{id}` — remove a contact, 404 if absent.
pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let target = ContactId::new(id);
    if state.contacts.get(target).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.contacts.delete(target).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/contacts/search?name=frag` — contacts whose name contains the
/// fragment, case-insensitive. A missing or blank fragment is rejected
/// before the store is consulted; otherwise the fragment is searched as
/// given, surrounding whitespace included.
pub(crate) async fn search_contacts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let fragment = query.name.as_deref().unwrap_or_default();
    if fragment.trim().is_empty() {
        return Err(ApiError::Validation(
            "query parameter 'name' is required".to_string(),
        ));
    }

    Ok(Json(state.contacts.search(fragment).await?))
}
