//! Client record endpoints.

use axum::extract::{Path, State};
use axum::Json;

use clientdesk_core::{AppError, AppResult};
use clientdesk_entity::client::{Client, NewClient};

use crate::state::AppState;

/// `GET /clients` — list all client records.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.clients.get_all().await?;
    Ok(Json(clients))
}

/// `GET /clients/{id}` — fetch a single client record.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Client>> {
    let client = state
        .clients
        .read(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))?;
    Ok(Json(client))
}

/// `POST /clients` — create a client record.
pub async fn create(
    State(state): State<AppState>,
    Json(new_client): Json<NewClient>,
) -> AppResult<Json<Client>> {
    let client = state.clients.create(new_client).await?;
    Ok(Json(client))
}

/// `PUT /clients` — update a client record in place.
///
/// The target id travels in the body. An unknown id is a 400, matching
/// the distinction from the 404 on missing reads.
pub async fn update(
    State(state): State<AppState>,
    Json(client): Json<Client>,
) -> AppResult<Json<Client>> {
    let updated = state.clients.update(&client).await?;
    if !updated {
        return Err(AppError::validation(format!(
            "Client {} does not exist",
            client.id
        )));
    }
    Ok(Json(client))
}

/// `DELETE /clients/{id}` — remove a client record.
///
/// Deleting an unknown id is a no-op that still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    state.clients.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
