use axum::extract::{Path, State};
use axum::http::StatusCode;
use rollcall_common::error::RollcallError;
use rollcall_db::person::models::Person;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::people::requests::PersonRequest;
use crate::people::responses::PeopleEnvelope;
use crate::AppState;

pub async fn list_people(State(state): State<AppState>) -> Result<PeopleEnvelope, ApiError> {
    let people = state.person_repo.list().await?;
    if people.is_empty() {
        return Err(ApiError(RollcallError::NotFound(
            "Data Not Found".to_string(),
        )));
    }
    Ok(PeopleEnvelope::success(StatusCode::OK, people))
}

pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PersonRequest>,
) -> Result<PeopleEnvelope, ApiError> {
    let person = Person::new(Uuid::new_v4().to_string(), body.into());
    let uuid = person.uuid.clone();

    let people = state.person_repo.create(person).await?;
    tracing::info!(%uuid, total = people.len(), "person created");
    Ok(PeopleEnvelope::success(StatusCode::CREATED, people))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PeopleEnvelope, ApiError> {
    let people = state.person_repo.get_by_uuid(&id).await?;
    Ok(PeopleEnvelope::success(StatusCode::OK, people))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<PersonRequest>,
) -> Result<PeopleEnvelope, ApiError> {
    let people = state.person_repo.update(&id, body.into()).await?;
    tracing::info!(uuid = %id, "person updated");
    Ok(PeopleEnvelope::success(StatusCode::OK, people))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PeopleEnvelope, ApiError> {
    let people = state.person_repo.delete(&id).await?;
    tracing::info!(uuid = %id, remaining = people.len(), "person deleted");
    Ok(PeopleEnvelope::success(StatusCode::OK, people))
}
