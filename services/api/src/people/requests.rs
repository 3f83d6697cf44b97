use rollcall_db::person::models::PersonFields;
use serde::Deserialize;

/// Body of `POST /` and `PUT /person/{id}`. Keys are the lowercase
/// `name` and `nickname`; missing keys decode as empty strings and any
/// other key, `uuid` included, is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PersonRequest {
    pub name: String,
    pub nickname: String,
}

impl From<PersonRequest> for PersonFields {
    fn from(req: PersonRequest) -> Self {
        Self {
            name: req.name,
            nickname: req.nickname,
        }
    }
}
