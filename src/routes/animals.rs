//! Animal catalog routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

use crate::model::{Animal, MovementType, Species};
use crate::services::zoo::ZooError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub id: Option<i32>,
    pub name: &'static str,
    pub movement_type: MovementType,
}

fn to_response(animal: &Animal) -> AnimalResponse {
    AnimalResponse { id: animal.id(), name: animal.name(), movement_type: animal.movement_type() }
}

fn to_responses(animals: &[Animal]) -> Vec<AnimalResponse> {
    animals.iter().map(to_response).collect()
}

/// `GET /animals/` — every animal, ordered by name.
pub async fn list_animals(State(state): State<AppState>) -> Result<Json<Vec<AnimalResponse>>, StatusCode> {
    let animals = state
        .zoo
        .get_all_animals()
        .await
        .map_err(zoo_error_to_status)?;
    Ok(Json(to_responses(&animals)))
}

/// `GET /animals/:movement_type` — animals that fly or walk.
///
/// An unrecognized movement type and an empty match both answer 404.
pub async fn list_by_movement_type(
    State(state): State<AppState>,
    Path(movement_type): Path<String>,
) -> Result<(StatusCode, Json<Vec<AnimalResponse>>), StatusCode> {
    let Some(movement_type) = MovementType::from_path_segment(&movement_type) else {
        return Err(StatusCode::NOT_FOUND);
    };

    let animals = state
        .zoo
        .get_animals_by_movement_type(movement_type)
        .await
        .map_err(zoo_error_to_status)?;

    let status = if animals.is_empty() { StatusCode::NOT_FOUND } else { StatusCode::OK };
    Ok((status, Json(to_responses(&animals))))
}

/// `POST /animals/:name/add` — add a lion, eagle, or tiger.
///
/// 201 with a `Location` header when stored, 409 with the unsaved animal
/// when one of that species is already in the zoo.
pub async fn add_animal(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response, StatusCode> {
    let Some(species) = Species::from_path_segment(&name) else {
        let body = serde_json::json!({ "error": format!("unknown animal: {name}") });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    };

    let outcome = state
        .zoo
        .add_animal(&candidate_for(species))
        .await
        .map_err(zoo_error_to_status)?;

    let body = Json(to_response(outcome.animal()));
    if outcome.was_added() {
        Ok((StatusCode::CREATED, [(LOCATION, format!("/animals/{name}"))], body).into_response())
    } else {
        Ok((StatusCode::CONFLICT, body).into_response())
    }
}

/// Lions and tigers walk, eagles fly.
fn candidate_for(species: Species) -> Animal {
    match species {
        Species::Lion => Animal::lion(MovementType::Walking),
        Species::Eagle => Animal::eagle(MovementType::Flying),
        Species::Tiger => Animal::tiger(MovementType::Walking),
    }
}

pub(crate) fn zoo_error_to_status(err: ZooError) -> StatusCode {
    error!(error = %err, retryable = err.is_retryable(), "zoo request failed");
    if err.is_retryable() { StatusCode::SERVICE_UNAVAILABLE } else { StatusCode::INTERNAL_SERVER_ERROR }
}

#[cfg(test)]
#[path = "animals_test.rs"]
mod tests;
