use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rollcall_db::person::models::Person;
use serde::Serialize;

/// A row inside `data`, keyed `uuid`, `name`, `nickname`.
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub uuid: String,
    pub name: String,
    pub nickname: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            uuid: person.uuid,
            name: person.name,
            nickname: person.nickname,
        }
    }
}

/// `{"status": "success", "statusCode": .., "data": [..]}`, sent with the
/// same HTTP status as `statusCode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleEnvelope {
    pub status: &'static str,
    pub status_code: u16,
    pub data: Vec<PersonResponse>,
}

impl PeopleEnvelope {
    pub fn success(status: StatusCode, people: Vec<Person>) -> Self {
        Self {
            status: "success",
            status_code: status.as_u16(),
            data: people.into_iter().map(PersonResponse::from).collect(),
        }
    }
}

impl IntoResponse for PeopleEnvelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
